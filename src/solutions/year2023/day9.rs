use anyhow::Result;

use crate::{numbers_in, Answer, PuzzleInput};

fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let differences: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&differences)
}

fn sum_of_extrapolations(input: &PuzzleInput, backwards: bool) -> Result<Answer> {
    let mut sum = 0;
    for line in input.lines().filter(|line| !line.is_empty()) {
        let mut values = numbers_in(line)?;
        if backwards {
            values.reverse();
        }
        sum += extrapolate(&values);
    }
    Ok(sum.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    sum_of_extrapolations(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    sum_of_extrapolations(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        0 3 6 9 12 15
        1 3 6 10 15 21
        10 13 16 21 30 45
    "};

    #[test]
    fn test_day9() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(114));
        assert_eq!(part_b(&input)?, Answer::from(2));
        assert_eq!(part_a(&PuzzleInput::example("5 1 -3\n"))?, Answer::from(-7));
        Ok(())
    }
}
