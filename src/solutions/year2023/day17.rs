use std::{cmp::Reverse, collections::BinaryHeap};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    Answer, PuzzleInput,
};

fn heat_losses(input: &PuzzleInput) -> Result<Grid<u32>> {
    Grid::from_lines(input.lines().filter(|line| !line.is_empty()), |c| {
        c.to_digit(10).with_context(|| format!("invalid heat loss {c:?}"))
    })
}

/// Each move goes `min..=max` blocks straight and then turns, so the state only needs the
/// axis the crucible arrived on.
fn least_heat_loss(grid: &Grid<u32>, min: isize, max: isize) -> Option<u32> {
    let end = Coords::new(grid.width() as isize - 1, grid.height() as isize - 1);
    let mut best: FxHashMap<(Coords, bool), u32> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    for horizontal in [true, false] {
        best.insert((Coords::new(0, 0), horizontal), 0);
        heap.push(Reverse((0, Coords::new(0, 0), horizontal)));
    }
    while let Some(Reverse((loss, c, horizontal))) = heap.pop() {
        if c == end {
            return Some(loss);
        }
        if best.get(&(c, horizontal)).is_some_and(|&known| known < loss) {
            continue;
        }
        let turns = Direction::ALL.into_iter().filter(|d| d.is_horizontal() != horizontal);
        for direction in turns {
            let mut next_loss = loss;
            for steps in 1..=max {
                let next = direction.next_coords_by(c, steps);
                let Some(&block) = grid.get(next) else {
                    break;
                };
                next_loss += block;
                if steps < min {
                    continue;
                }
                let state = (next, direction.is_horizontal());
                let known = best.entry(state).or_insert(u32::MAX);
                if next_loss < *known {
                    *known = next_loss;
                    heap.push(Reverse((next_loss, next, state.1)));
                }
            }
        }
    }
    None
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let grid = heat_losses(input)?;
    Ok(least_heat_loss(&grid, 1, 3).context("the factory is unreachable")?.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let grid = heat_losses(input)?;
    Ok(least_heat_loss(&grid, 4, 10).context("the factory is unreachable")?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        2413432311323
        3215453535623
        3255245654254
        3446585845452
        4546657867536
        1438598798454
        4457876987766
        3637877979653
        4654967986887
        4564679986453
        1224686865563
        2546548887735
        4322674655533
    "};

    #[test]
    fn test_day17() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(102));
        assert_eq!(part_b(&input)?, Answer::from(94));
        Ok(())
    }

    #[test]
    fn test_ultra_crucible_must_roll_four_blocks() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            111111111111
            999999999991
            999999999991
            999999999991
            999999999991
        "});
        assert_eq!(part_b(&input)?, Answer::from(71));
        Ok(())
    }
}
