use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

use crate::{numbers_in, Answer, PuzzleInput};

fn parse(input: &PuzzleInput) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let numbers = numbers_in(line)?;
        let &[l, r] = numbers.as_slice() else {
            bail!("expected two location ids on line {line:?}");
        };
        left.push(l);
        right.push(r);
    }
    Ok((left, right))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (mut left, mut right) = parse(input)?;
    left.sort_unstable();
    right.sort_unstable();
    let distance: i64 = left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum();
    Ok(distance.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (left, right) = parse(input)?;
    let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
    for r in right {
        *counts.entry(r).or_default() += 1;
    }
    let similarity: i64 = left
        .iter()
        .map(|l| l * counts.get(l).copied().unwrap_or(0))
        .sum();
    Ok(similarity.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        3   4
        4   3
        2   5
        1   3
        3   9
        3   3
    "};

    #[test]
    fn test_day1() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(11));
        assert_eq!(part_b(&input)?, Answer::from(31));
        Ok(())
    }
}
