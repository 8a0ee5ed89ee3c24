use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::{
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Plot = '.',
        Rock = '#',
        Start = 'S',
    }
}

struct Garden {
    grid: Grid<Tile>,
    start: Coords,
}

impl Garden {
    fn parse(input: &PuzzleInput) -> Result<Self> {
        let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
        let start = grid.find(&Tile::Start).context("no starting position")?;
        Ok(Self { grid, start })
    }

    /// Tile at `c` on the garden repeated infinitely in every direction.
    fn tile(&self, c: Coords) -> Tile {
        let (width, height) = (self.grid.width() as isize, self.grid.height() as isize);
        self.grid[Coords::new(c.x.rem_euclid(width), c.y.rem_euclid(height))]
    }

    /// Plots reachable in exactly `steps` steps: those at a distance of at most `steps` with
    /// the same parity.
    fn reachable(&self, steps: usize, infinite: bool) -> usize {
        let mut seen: FxHashSet<Coords> = FxHashSet::from_iter([self.start]);
        let mut queue = VecDeque::from([(self.start, 0)]);
        let mut count = 0;
        while let Some((c, distance)) = queue.pop_front() {
            if distance % 2 == steps % 2 {
                count += 1;
            }
            if distance == steps {
                continue;
            }
            for next in c.neighbours() {
                let open = match infinite {
                    true => self.tile(next) != Tile::Rock,
                    false => self.grid.get(next).is_some_and(|&tile| tile != Tile::Rock),
                };
                if open && seen.insert(next) {
                    queue.push_back((next, distance + 1));
                }
            }
        }
        count
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let garden = Garden::parse(input)?;
    let steps = if input.is_example() { 6 } else { 64 };
    Ok(garden.reachable(steps, false).into())
}

/// The start row and column are free of rocks, so the reachable count grows quadratically
/// with every additional garden width walked; three samples fix the quadratic.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    const STEPS: usize = 26_501_365;
    if input.is_example() {
        bail!("the example garden does not grow quadratically");
    }
    let garden = Garden::parse(input)?;
    let size = garden.grid.width();
    let (cycles, remainder) = (STEPS / size, STEPS % size);
    let samples: Vec<i64> = (0..3)
        .map(|i| garden.reachable(remainder + i * size, true) as i64)
        .collect();
    let (a, b, c) = (samples[0], samples[1], samples[2]);
    let n = cycles as i64;
    // Newton forward differences.
    let first = b - a;
    let second = c - 2 * b + a;
    Ok((a + first * n + second * n * (n - 1) / 2).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ...........
        .....###.#.
        .###.##..#.
        ..#.#...#..
        ....#.#....
        .##..S####.
        .##..#...#.
        .......##..
        .##.#.####.
        .##..##.##.
        ...........
    "};

    #[test]
    fn test_day21() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(16));
        assert!(part_b(&input).is_err());
        Ok(())
    }

    #[test]
    fn test_infinite_open_garden() -> Result<()> {
        let input = PuzzleInput::real("...\n.S.\n...\n");
        assert_eq!(part_b(&input)?, Answer::from(702322399865956_i64));
        let garden = Garden::parse(&input)?;
        assert_eq!(garden.reachable(10, true), 121);
        Ok(())
    }
}
