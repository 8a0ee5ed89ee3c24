use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    Answer, PuzzleInput,
};

struct Region {
    area: usize,
    perimeter: usize,
    sides: usize,
}

fn regions(grid: &Grid<u8>) -> Vec<Region> {
    let mut seen: FxHashSet<Coords> = FxHashSet::default();
    let mut regions = Vec::new();
    for (start, &plant) in grid.iter() {
        if !seen.insert(start) {
            continue;
        }
        let same = |c: Coords| grid.get(c) == Some(&plant);
        let mut region = Region {
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            region.area += 1;
            for direction in Direction::ALL {
                let next = c.step(direction);
                if same(next) {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                    continue;
                }
                region.perimeter += 1;
                // A fence piece starts a new side unless the plot to its left has the same fence.
                let left = c.step(direction.ccw());
                if !same(left) || same(left.step(direction)) {
                    region.sides += 1;
                }
            }
        }
        regions.push(region);
    }
    regions
}

fn fence_price(input: &PuzzleInput, bulk: bool) -> Result<Answer> {
    let grid = Grid::from_bytes(input.lines().filter(|line| !line.is_empty()))?;
    let price: usize = regions(&grid)
        .iter()
        .map(|r| r.area * if bulk { r.sides } else { r.perimeter })
        .sum();
    Ok(price.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    fence_price(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    fence_price(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day12() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            AAAA
            BBCD
            BBCC
            EEEC
        "});
        assert_eq!(part_a(&input)?, Answer::from(140));
        assert_eq!(part_b(&input)?, Answer::from(80));

        let input = PuzzleInput::example(indoc! {"
            OOOOO
            OXOXO
            OOOOO
            OXOXO
            OOOOO
        "});
        assert_eq!(part_a(&input)?, Answer::from(772));
        assert_eq!(part_b(&input)?, Answer::from(436));
        Ok(())
    }
}
