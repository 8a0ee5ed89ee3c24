use anyhow::Result;
use itertools::Itertools;

use crate::{numbers_in, Answer, PuzzleInput};

fn reports(input: &PuzzleInput) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(numbers_in)
        .collect()
}

fn is_safe(levels: &[i64]) -> bool {
    let diffs = levels.iter().tuple_windows().map(|(a, b)| b - a);
    let (mut increasing, mut decreasing) = (true, true);
    for diff in diffs {
        increasing &= (1..=3).contains(&diff);
        decreasing &= (-3..=-1).contains(&diff);
    }
    increasing || decreasing
}

fn is_safe_with_dampener(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let dampened: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &level)| level)
                .collect();
            is_safe(&dampened)
        })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok(reports(input)?.iter().filter(|levels| is_safe(levels)).count().into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    Ok(reports(input)?
        .iter()
        .filter(|levels| is_safe_with_dampener(levels))
        .count()
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        7 6 4 2 1
        1 2 7 8 9
        9 7 6 2 1
        1 3 2 4 5
        8 6 4 4 1
        1 3 6 7 9
    "};

    #[test]
    fn test_day2() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(2));
        assert_eq!(part_b(&input)?, Answer::from(4));
        Ok(())
    }
}
