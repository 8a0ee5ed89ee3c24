use anyhow::{bail, Context, Result};

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Pipe {
        Vertical = '|',
        Horizontal = '-',
        NorthEast = 'L',
        NorthWest = 'J',
        SouthWest = '7',
        SouthEast = 'F',
        Ground = '.',
        Start = 'S',
    }
}

impl Pipe {
    fn connects(self, direction: Direction) -> bool {
        use Direction::*;
        matches!(
            (self, direction),
            (Pipe::Start, _)
                | (Pipe::Vertical, North | South)
                | (Pipe::Horizontal, East | West)
                | (Pipe::NorthEast, North | East)
                | (Pipe::NorthWest, North | West)
                | (Pipe::SouthWest, South | West)
                | (Pipe::SouthEast, South | East)
        )
    }
}

/// Tiles of the main loop, in order, starting at `S`.
fn main_loop(input: &PuzzleInput) -> Result<Vec<Coords>> {
    let grid: Grid<Pipe> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let start = grid.find(&Pipe::Start).context("no starting tile")?;
    let mut direction = Direction::ALL
        .into_iter()
        .find(|&d| {
            grid.get(start.step(d))
                .is_some_and(|pipe| *pipe != Pipe::Start && pipe.connects(d.opposite()))
        })
        .context("nothing connects to the starting tile")?;

    let mut tiles = vec![start];
    let mut position = start.step(direction);
    while position != start {
        tiles.push(position);
        let pipe = grid.value_at_or(position, Pipe::Ground);
        let Some(next) = direction.opposite().all_but().find(|&d| pipe.connects(d)) else {
            bail!("the loop breaks at {position}");
        };
        direction = next;
        position = position.step(direction);
    }
    Ok(tiles)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok((main_loop(input)?.len() / 2).into())
}

/// Shoelace formula for the loop area, then Pick's theorem for the interior points.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let tiles = main_loop(input)?;
    let doubled_area: isize = tiles
        .iter()
        .zip(tiles.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    let interior = doubled_area.unsigned_abs() / 2 + 1 - tiles.len() / 2;
    Ok(interior.into())
}
