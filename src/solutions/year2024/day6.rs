use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        Obstruction = '#',
        Guard = '^',
    }
}

enum Patrol {
    Leaves(FxHashSet<Coords>),
    Loops,
}

fn patrol(grid: &Grid<Tile>, start: Coords, extra: Option<Coords>) -> Patrol {
    let mut seen: FxHashSet<(Coords, Direction)> = FxHashSet::default();
    let mut position = start;
    let mut direction = Direction::North;
    loop {
        if !seen.insert((position, direction)) {
            return Patrol::Loops;
        }
        let next = position.step(direction);
        match grid.get(next) {
            None => break,
            Some(Tile::Obstruction) => direction = direction.cw(),
            Some(_) if Some(next) == extra => direction = direction.cw(),
            Some(_) => position = next,
        }
    }
    Patrol::Leaves(seen.into_iter().map(|(c, _)| c).collect())
}

fn parse(input: &PuzzleInput) -> Result<(Grid<Tile>, Coords)> {
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let start = grid.find(&Tile::Guard).context("no guard on the map")?;
    Ok((grid, start))
}

fn visited(grid: &Grid<Tile>, start: Coords) -> Result<FxHashSet<Coords>> {
    match patrol(grid, start, None) {
        Patrol::Leaves(visited) => Ok(visited),
        Patrol::Loops => anyhow::bail!("the guard never leaves the map"),
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (grid, start) = parse(input)?;
    Ok(visited(&grid, start)?.len().into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (grid, start) = parse(input)?;
    let candidates: Vec<Coords> = visited(&grid, start)?
        .into_iter()
        .filter(|&c| c != start)
        .collect();
    let loops = candidates
        .par_iter()
        .filter(|&&obstruction| matches!(patrol(&grid, start, Some(obstruction)), Patrol::Loops))
        .count();
    Ok(loops.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ....#.....
        .........#
        ..........
        ..#.......
        .......#..
        ..........
        .#..^.....
        ........#.
        #.........
        ......#...
    "};

    #[test]
    fn test_day6() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(41));
        assert_eq!(part_b(&input)?, Answer::from(6));
        Ok(())
    }
}
