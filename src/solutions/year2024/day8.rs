use anyhow::Result;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    grid::{Coords, Grid},
    Answer, PuzzleInput,
};

fn antennas(grid: &Grid<u8>) -> FxHashMap<u8, Vec<Coords>> {
    let mut by_frequency: FxHashMap<u8, Vec<Coords>> = FxHashMap::default();
    for (c, &tile) in grid.iter() {
        if tile != b'.' {
            by_frequency.entry(tile).or_default().push(c);
        }
    }
    by_frequency
}

fn count_antinodes(input: &PuzzleInput, harmonics: bool) -> Result<Answer> {
    let grid = Grid::from_bytes(input.lines().filter(|line| !line.is_empty()))?;
    let mut antinodes: FxHashSet<Coords> = FxHashSet::default();
    for positions in antennas(&grid).values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            for (from, delta) in [(a, a - b), (b, b - a)] {
                if harmonics {
                    let mut c = from;
                    while grid.within_bounds(c) {
                        antinodes.insert(c);
                        c = c + delta;
                    }
                } else if grid.within_bounds(from + delta) {
                    antinodes.insert(from + delta);
                }
            }
        }
    }
    Ok(antinodes.len().into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    count_antinodes(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    count_antinodes(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ............
        ........0...
        .....0......
        .......0....
        ....0.......
        ......A.....
        ............
        ............
        ........A...
        .........A..
        ............
        ............
    "};

    #[test]
    fn test_day8() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(14));
        assert_eq!(part_b(&input)?, Answer::from(34));
        Ok(())
    }
}
