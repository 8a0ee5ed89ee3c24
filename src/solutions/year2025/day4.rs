use anyhow::Result;

use crate::{
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        Roll = '@',
    }
}

fn parse(input: &PuzzleInput) -> Result<Grid<Tile>> {
    Grid::parse(input.lines().filter(|line| !line.is_empty()))
}

/// Rolls with fewer than four rolls among their eight neighbours.
fn accessible(grid: &Grid<Tile>) -> Vec<Coords> {
    grid.all_coords_for(&[Tile::Roll])
        .filter(|c| {
            c.neighbours8()
                .filter(|&n| grid.get(n) == Some(&Tile::Roll))
                .count()
                < 4
        })
        .collect()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok(accessible(&parse(input)?).len().into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let mut grid = parse(input)?;
    let mut removed = 0;
    loop {
        let rolls = accessible(&grid);
        if rolls.is_empty() {
            break;
        }
        removed += rolls.len();
        for c in rolls {
            grid.set(c, Tile::Empty)?;
        }
    }
    Ok(removed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ..@@.@@@@.
        @@@.@.@.@@
        @@@@@.@.@@
        @.@@@@..@.
        @@.@@@@.@@
        .@@@@@@@.@
        .@.@.@.@@@
        @.@@@.@@@@
        .@@@@@@@@.
        @.@.@@@.@.
    "};

    #[test]
    fn test_day4() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(13));
        assert_eq!(part_b(&input)?, Answer::from(43));
        Ok(())
    }
}
