use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::{
    grid::{Coords, Grid},
    Answer, PuzzleInput,
};

fn heights(input: &PuzzleInput) -> Result<Grid<u8>> {
    Grid::from_lines(input.lines().filter(|line| !line.is_empty()), |c| {
        c.to_digit(10)
            .map(|d| d as u8)
            .with_context(|| format!("invalid height {c:?}"))
    })
}

/// Calls `on_summit` for every distinct hiking trail from `from` to a height 9.
fn walk(grid: &Grid<u8>, from: Coords, on_summit: &mut impl FnMut(Coords)) {
    let height = grid[from];
    if height == 9 {
        on_summit(from);
        return;
    }
    for next in from.neighbours() {
        if grid.get(next) == Some(&(height + 1)) {
            walk(grid, next, on_summit);
        }
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let grid = heights(input)?;
    let score: usize = grid
        .all_coords_for(&[0])
        .map(|trailhead| {
            let mut summits = FxHashSet::default();
            walk(&grid, trailhead, &mut |summit| {
                summits.insert(summit);
            });
            summits.len()
        })
        .sum();
    Ok(score.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let grid = heights(input)?;
    let mut rating = 0usize;
    for trailhead in grid.all_coords_for(&[0]) {
        walk(&grid, trailhead, &mut |_| rating += 1);
    }
    Ok(rating.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        89010123
        78121874
        87430965
        96549874
        45678903
        32019012
        01329801
        10456732
    "};

    #[test]
    fn test_day10() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(36));
        assert_eq!(part_b(&input)?, Answer::from(81));
        Ok(())
    }
}
