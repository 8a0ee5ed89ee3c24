use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::{Answer, PuzzleInput};

/// Number of winning numbers per card.
fn matches(input: &PuzzleInput) -> Result<Vec<usize>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (_, numbers) = line
                .split_once(':')
                .with_context(|| format!("invalid card {line:?}"))?;
            let (winning, have) = numbers
                .split_once('|')
                .with_context(|| format!("card without separator {line:?}"))?;
            let winning: FxHashSet<&str> = winning.split_whitespace().collect();
            Ok(have.split_whitespace().filter(|n| winning.contains(n)).count())
        })
        .collect()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let points: usize = matches(input)?
        .into_iter()
        .filter(|&m| m > 0)
        .map(|m| 1 << (m - 1))
        .sum();
    Ok(points.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let matches = matches(input)?;
    let mut copies = vec![1usize; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        for j in i + 1..(i + 1 + m).min(copies.len()) {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum::<usize>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
        Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
        Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
        Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
        Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
        Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
    "};

    #[test]
    fn test_day4() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(13));
        assert_eq!(part_b(&input)?, Answer::from(30));
        Ok(())
    }
}
