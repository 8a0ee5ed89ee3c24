use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{
    grid::{Coords, Grid},
    parse_usize_from_bytes, Answer, PuzzleInput,
};

struct PartNumber {
    value: usize,
    /// Symbols adjacent to the number, with their position.
    symbols: Vec<(Coords, u8)>,
}

fn part_numbers(input: &PuzzleInput) -> Result<Vec<PartNumber>> {
    let grid = Grid::from_bytes(input.lines().filter(|line| !line.is_empty()))?;
    let mut numbers = Vec::new();
    for y in 0..grid.height() {
        let row = grid.row(y);
        let mut x = 0;
        while x < row.len() {
            if !row[x].is_ascii_digit() {
                x += 1;
                continue;
            }
            let start = x;
            while x < row.len() && row[x].is_ascii_digit() {
                x += 1;
            }
            let mut symbols = Vec::new();
            for sx in start as isize - 1..=x as isize {
                for sy in y as isize - 1..=y as isize + 1 {
                    let c = Coords::new(sx, sy);
                    if let Some(&b) = grid.get(c) {
                        if b != b'.' && !b.is_ascii_digit() {
                            symbols.push((c, b));
                        }
                    }
                }
            }
            numbers.push(PartNumber {
                value: parse_usize_from_bytes(&row[start..x]),
                symbols,
            });
        }
    }
    Ok(numbers)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let sum: usize = part_numbers(input)?
        .iter()
        .filter(|number| !number.symbols.is_empty())
        .map(|number| number.value)
        .sum();
    Ok(sum.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let mut gears: FxHashMap<Coords, Vec<usize>> = FxHashMap::default();
    for number in part_numbers(input)? {
        for &(c, symbol) in &number.symbols {
            if symbol == b'*' {
                gears.entry(c).or_default().push(number.value);
            }
        }
    }
    let ratios: usize = gears
        .values()
        .filter(|numbers| numbers.len() == 2)
        .map(|numbers| numbers[0] * numbers[1])
        .sum();
    Ok(ratios.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        467..114..
        ...*......
        ..35..633.
        ......#...
        617*......
        .....+.58.
        ..592.....
        ......755.
        ...$.*....
        .664.598..
    "};

    #[test]
    fn test_day3() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(4361));
        assert_eq!(part_b(&input)?, Answer::from(467835));
        Ok(())
    }
}
