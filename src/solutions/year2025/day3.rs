use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

/// Largest number formed by picking `count` digits of `bank` in order: greedily take the
/// highest digit that still leaves enough digits behind it.
fn max_joltage(bank: &[u8], count: usize) -> Result<u64> {
    if bank.len() < count {
        bail!("bank {:?} has fewer than {count} batteries", String::from_utf8_lossy(bank));
    }
    let mut joltage = 0;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &digit)| digit)
            .unwrap_or((0, &b'0'));
        joltage = joltage * 10 + (digit - b'0') as u64;
        start += offset + 1;
    }
    Ok(joltage)
}

fn total_joltage(input: &PuzzleInput, count: usize) -> Result<Answer> {
    let mut total = 0;
    for line in input.lines().filter(|line| !line.is_empty()) {
        if !line.bytes().all(|b| b.is_ascii_digit()) {
            bail!("invalid battery bank {line:?}");
        }
        total += max_joltage(line.as_bytes(), count)?;
    }
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    total_joltage(input, 2)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    total_joltage(input, 12)
}
