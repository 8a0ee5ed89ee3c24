use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

/// Row and column bitmasks of one pattern, `#` being a set bit.
fn masks(pattern: &[&str]) -> Result<(Vec<u64>, Vec<u64>)> {
    let width = pattern.first().map_or(0, |row| row.len());
    if width > 64 || pattern.len() > 64 {
        bail!("pattern of {width}x{} does not fit a bitmask", pattern.len());
    }
    let mut rows = vec![0u64; pattern.len()];
    let mut columns = vec![0u64; width];
    for (y, row) in pattern.iter().enumerate() {
        if row.len() != width {
            bail!("row {y} of pattern is {} wide instead of {width}", row.len());
        }
        for (x, b) in row.bytes().enumerate() {
            if b == b'#' {
                rows[y] |= 1 << x;
                columns[x] |= 1 << y;
            }
        }
    }
    Ok((rows, columns))
}

/// Number of lines before a mirror line where the reflection differs in exactly `smudges`
/// cells.
fn reflection(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&split| {
        let (before, after) = lines.split_at(split);
        before
            .iter()
            .rev()
            .zip(after)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

fn summarize(input: &PuzzleInput, smudges: u32) -> Result<Answer> {
    let mut total = 0;
    for pattern in input.groups() {
        let (rows, columns) = masks(&pattern)?;
        total += match (reflection(&columns, smudges), reflection(&rows, smudges)) {
            (Some(left), _) => left,
            (None, Some(above)) => 100 * above,
            (None, None) => bail!("pattern without reflection:\n{}", pattern.join("\n")),
        };
    }
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    summarize(input, 0)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    summarize(input, 1)
}
