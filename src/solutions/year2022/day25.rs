use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

fn from_snafu(number: &str) -> Result<i64> {
    number.chars().try_fold(0, |value, c| {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            _ => bail!("invalid SNAFU digit {c:?}"),
        };
        Ok(value * 5 + digit)
    })
}

fn to_snafu(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value != 0 {
        let (digit, carry) = match value.rem_euclid(5) {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        value = value.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let total = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(from_snafu)
        .sum::<Result<i64>>()?;
    Ok(to_snafu(total).into())
}

pub fn part_b(_input: &PuzzleInput) -> Result<Answer> {
    Ok("no part two".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1=-0-2
        12111
        2=0=
        21
        2=01
        111
        20012
        112
        1=-1=
        1-12
        12
        1=
        122
    "};

    #[test]
    fn test_day25() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from("2=-1=0"));
        Ok(())
    }

    #[test]
    fn test_conversions() -> Result<()> {
        assert_eq!(from_snafu("1121-1110-1=0")?, 314159265);
        assert_eq!(to_snafu(2022), "1=11-2");
        assert_eq!(to_snafu(-3), "-2");
        assert!(from_snafu("3").is_err());
        Ok(())
    }
}
