use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{Answer, PuzzleInput};

const PRUNE: u64 = 16_777_216;

fn next_secret(mut secret: u64) -> u64 {
    secret = ((secret * 64) ^ secret) % PRUNE;
    secret = ((secret / 32) ^ secret) % PRUNE;
    ((secret * 2048) ^ secret) % PRUNE
}

fn secrets(input: &PuzzleInput) -> Result<Vec<u64>> {
    Ok(input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::parse::<u64>)
        .collect::<Result<_, _>>()?)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let total: u64 = secrets(input)?
        .into_iter()
        .map(|secret| (0..2000).fold(secret, |s, _| next_secret(s)))
        .sum();
    Ok(total.into())
}

/// Four consecutive price changes, each in -9..=9, packed into one base-19 number.
fn pack(changes: &[i64]) -> usize {
    changes.iter().fold(0, |key, &change| key * 19 + (change + 9) as usize)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let mut bananas: FxHashMap<usize, u64> = FxHashMap::default();
    for mut secret in secrets(input)? {
        let mut prices = Vec::with_capacity(2001);
        prices.push((secret % 10) as i64);
        for _ in 0..2000 {
            secret = next_secret(secret);
            prices.push((secret % 10) as i64);
        }
        let changes: Vec<i64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
        let mut seen = vec![false; 19usize.pow(4)];
        for (i, window) in changes.windows(4).enumerate() {
            let key = pack(window);
            if !seen[key] {
                seen[key] = true;
                *bananas.entry(key).or_default() += prices[i + 4] as u64;
            }
        }
    }
    Ok(bananas.values().max().copied().unwrap_or(0).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day22() -> Result<()> {
        assert_eq!(part_a(&PuzzleInput::example("1\n10\n100\n2024\n"))?, Answer::from(37327623));
        assert_eq!(part_b(&PuzzleInput::example("1\n2\n3\n2024\n"))?, Answer::from(23));
        Ok(())
    }

    #[test]
    fn test_next_secret() {
        assert_eq!(next_secret(123), 15887950);
        assert_eq!(next_secret(15887950), 16495136);
    }
}
