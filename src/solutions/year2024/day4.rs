use anyhow::Result;

use crate::{
    grid::{Coords, Grid},
    Answer, PuzzleInput,
};

fn letters(input: &PuzzleInput) -> Result<Grid<u8>> {
    Grid::from_bytes(input.lines().filter(|line| !line.is_empty()))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let grid = letters(input)?;
    let count = grid
        .all_coords_for(b"X")
        .map(|start| {
            Coords::new(0, 0)
                .neighbours8()
                .filter(|&delta| {
                    b"MAS".iter().enumerate().all(|(i, &letter)| {
                        grid.get(start + delta * (i as isize + 1)) == Some(&letter)
                    })
                })
                .count()
        })
        .sum::<usize>();
    Ok(count.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let grid = letters(input)?;
    let is_mas = |a: Coords, b: Coords| {
        matches!(
            (grid.get(a), grid.get(b)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    let count = grid
        .all_coords_for(b"A")
        .filter(|&c| {
            is_mas(c + Coords::new(-1, -1), c + Coords::new(1, 1))
                && is_mas(c + Coords::new(1, -1), c + Coords::new(-1, 1))
        })
        .count();
    Ok(count.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        MMMSXXMASM
        MSAMXMSMSA
        AMXSXMAAMM
        MSAMASMSMX
        XMASAMXAMM
        XXAMMXXAMA
        SMSMSASXSS
        SAXAMASAAA
        MAMMMXMMMM
        MXMXAXMASX
    "};

    #[test]
    fn test_day4() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(18));
        assert_eq!(part_b(&input)?, Answer::from(9));
        Ok(())
    }
}
