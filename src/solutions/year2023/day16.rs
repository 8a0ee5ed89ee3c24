use anyhow::Result;
use rayon::prelude::*;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        MirrorSlash = '/',
        MirrorBackslash = '\\',
        SplitterVertical = '|',
        SplitterHorizontal = '-',
    }
}

impl Tile {
    fn outgoing(self, direction: Direction) -> (Direction, Option<Direction>) {
        use Direction::*;
        match (self, direction) {
            (Tile::MirrorSlash, North) => (East, None),
            (Tile::MirrorSlash, East) => (North, None),
            (Tile::MirrorSlash, South) => (West, None),
            (Tile::MirrorSlash, West) => (South, None),
            (Tile::MirrorBackslash, North) => (West, None),
            (Tile::MirrorBackslash, West) => (North, None),
            (Tile::MirrorBackslash, South) => (East, None),
            (Tile::MirrorBackslash, East) => (South, None),
            (Tile::SplitterVertical, East | West) => (North, Some(South)),
            (Tile::SplitterHorizontal, North | South) => (East, Some(West)),
            _ => (direction, None),
        }
    }
}

/// Number of tiles a beam entering at `start` heading `direction` passes through.
fn energized(grid: &Grid<Tile>, start: Coords, direction: Direction) -> usize {
    // One bit per direction a beam already crossed a tile in.
    let mut visited = Grid::from_size(grid.width(), grid.height(), 0u8);
    let mut beams = vec![(start, direction)];
    while let Some((c, direction)) = beams.pop() {
        let Some(seen) = visited.get_mut(c) else {
            continue;
        };
        let bit = 1 << direction.index();
        if *seen & bit != 0 {
            continue;
        }
        *seen |= bit;
        let (first, second) = grid[c].outgoing(direction);
        beams.push((c.step(first), first));
        if let Some(second) = second {
            beams.push((c.step(second), second));
        }
    }
    visited.tiles().filter(|&&bits| bits != 0).count()
}

fn parse(input: &PuzzleInput) -> Result<Grid<Tile>> {
    Grid::parse(input.lines().filter(|line| !line.is_empty()))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let grid = parse(input)?;
    Ok(energized(&grid, Coords::new(0, 0), Direction::East).into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let grid = parse(input)?;
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    let mut entries = Vec::new();
    for x in 0..width {
        entries.push((Coords::new(x, 0), Direction::South));
        entries.push((Coords::new(x, height - 1), Direction::North));
    }
    for y in 0..height {
        entries.push((Coords::new(0, y), Direction::East));
        entries.push((Coords::new(width - 1, y), Direction::West));
    }
    let best = entries
        .par_iter()
        .map(|&(start, direction)| energized(&grid, start, direction))
        .max()
        .unwrap_or(0);
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {r"
        .|...\....
        |.-.\.....
        .....|-...
        ........|.
        ..........
        .........\
        ..../.\\..
        .-.-/..|..
        .|....-|.\
        ..//.|....
    "};

    #[test]
    fn test_day16() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(46));
        assert_eq!(part_b(&input)?, Answer::from(51));
        Ok(())
    }
}
