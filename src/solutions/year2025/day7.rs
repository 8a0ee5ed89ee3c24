use anyhow::{Context, Result};

use crate::{grid::Grid, tile_enum, Answer, PuzzleInput};

tile_enum! {
    enum Tile {
        Empty = '.',
        Start = 'S',
        Splitter = '^',
    }
}

struct Manifold {
    splits: usize,
    timelines: u64,
}

/// Sends the beam downwards row by row, tracking how many timelines reach each column.
fn simulate(input: &PuzzleInput) -> Result<Manifold> {
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let start = grid.find(&Tile::Start).context("no beam entry point")?;
    let width = grid.width();
    let mut beams = vec![0u64; width];
    beams[start.x as usize] = 1;
    let mut splits = 0;
    for y in (start.y as usize + 1)..grid.height() {
        let row = grid.row(y);
        let mut next = vec![0u64; width];
        for (x, &count) in beams.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if row[x] == Tile::Splitter {
                splits += 1;
                if x > 0 {
                    next[x - 1] += count;
                }
                if x + 1 < width {
                    next[x + 1] += count;
                }
            } else {
                next[x] += count;
            }
        }
        beams = next;
    }
    Ok(Manifold {
        splits,
        timelines: beams.iter().sum(),
    })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok(simulate(input)?.splits.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    Ok(simulate(input)?.timelines.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        .......S.......
        ...............
        .......^.......
        ...............
        ......^.^......
        ...............
        .....^.^.^.....
        ...............
        ....^.^...^....
        ...............
        ...^.^...^.^...
        ...............
        ..^...^.....^..
        ...............
        .^.^.^.^.^...^.
        ...............
    "};

    #[test]
    fn test_day7() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(21));
        assert_eq!(part_b(&input)?, Answer::from(40));
        Ok(())
    }
}
