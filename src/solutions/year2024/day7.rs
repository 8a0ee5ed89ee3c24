use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{Answer, PuzzleInput};

struct Equation {
    test_value: u64,
    numbers: Vec<u64>,
}

fn parse(input: &PuzzleInput) -> Result<Vec<Equation>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (test_value, numbers) = line
                .split_once(": ")
                .with_context(|| format!("invalid equation {line:?}"))?;
            Ok(Equation {
                test_value: test_value.parse()?,
                numbers: numbers
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}

/// Works backwards from the test value: the last operator must undo cleanly.
fn solvable(target: u64, numbers: &[u64], concatenation: bool) -> bool {
    let Some((&last, rest)) = numbers.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    if target % last == 0 && last != 0 && solvable(target / last, rest, concatenation) {
        return true;
    }
    if target >= last && solvable(target - last, rest, concatenation) {
        return true;
    }
    if concatenation {
        let magnitude = 10u64.pow(last.checked_ilog10().unwrap_or(0) + 1);
        if target > last && (target - last) % magnitude == 0 {
            return solvable((target - last) / magnitude, rest, concatenation);
        }
    }
    false
}

fn calibration(input: &PuzzleInput, concatenation: bool) -> Result<Answer> {
    let total: u64 = parse(input)?
        .par_iter()
        .filter(|eq| solvable(eq.test_value, &eq.numbers, concatenation))
        .map(|eq| eq.test_value)
        .sum();
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    calibration(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    calibration(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        190: 10 19
        3267: 81 40 27
        83: 17 5
        156: 15 6
        7290: 6 8 6 15
        161011: 16 10 13
        192: 17 8 14
        21037: 9 7 18 13
        292: 11 6 16 20
    "};

    #[test]
    fn test_day7() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(3749));
        assert_eq!(part_b(&input)?, Answer::from(11387));
        Ok(())
    }
}
