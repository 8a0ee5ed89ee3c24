use anyhow::Result;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Rock {
        Round = 'O',
        Cube = '#',
        Empty = '.',
    }
}

/// Rolls every round rock as far as it goes in `direction`.
fn tilt(grid: &mut Grid<Rock>, direction: Direction) {
    let mut coords: Vec<Coords> = grid.coords().collect();
    // Rocks closest to the destination edge move first.
    match direction {
        Direction::North => {}
        Direction::South => coords.reverse(),
        Direction::West => coords.sort_unstable_by_key(|c| (c.x, c.y)),
        Direction::East => coords.sort_unstable_by_key(|c| (-c.x, c.y)),
    }
    for c in coords {
        if grid[c] != Rock::Round {
            continue;
        }
        let mut target = c;
        loop {
            let next = target.step(direction);
            if grid.get(next) != Some(&Rock::Empty) {
                break;
            }
            target = next;
        }
        if target != c {
            grid[c] = Rock::Empty;
            grid[target] = Rock::Round;
        }
    }
}

fn north_load(grid: &Grid<Rock>) -> usize {
    grid.all_coords_for(&[Rock::Round])
        .map(|c| grid.height() - c.y as usize)
        .sum()
}

fn parse(input: &PuzzleInput) -> Result<Grid<Rock>> {
    Grid::parse(input.lines().filter(|line| !line.is_empty()))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let mut grid = parse(input)?;
    tilt(&mut grid, Direction::North);
    Ok(north_load(&grid).into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    const CYCLES: usize = 1_000_000_000;
    let mut grid = parse(input)?;
    let mut seen: FxHashMap<Grid<Rock>, usize> = FxHashMap::default();
    let mut cycle = 0;
    while cycle < CYCLES {
        if let Some(&first) = seen.get(&grid) {
            let period = cycle - first;
            debug!(first, period, "spin cycle repeats");
            let remaining = (CYCLES - cycle) % period;
            for _ in 0..remaining {
                spin(&mut grid);
            }
            return Ok(north_load(&grid).into());
        }
        seen.insert(grid.clone(), cycle);
        spin(&mut grid);
        cycle += 1;
    }
    Ok(north_load(&grid).into())
}

fn spin(grid: &mut Grid<Rock>) {
    for direction in [Direction::North, Direction::West, Direction::South, Direction::East] {
        tilt(grid, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        O....#....
        O.OO#....#
        .....##...
        OO.#O....O
        .O.....O#.
        O.#..O.#.#
        ..O..#O..O
        .......O..
        #....###..
        #OO..#....
    "};

    #[test]
    fn test_day14() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(136));
        assert_eq!(part_b(&input)?, Answer::from(64));
        Ok(())
    }
}
