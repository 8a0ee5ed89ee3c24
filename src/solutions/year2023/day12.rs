use anyhow::{Context, Result};
use itertools::Itertools;
use rayon::prelude::*;

use crate::{Answer, PuzzleInput};

/// Counts the ways to place `groups` of damaged springs (`#`) into `pattern`, where `?` can be
/// either state.
fn arrangements(pattern: &[u8], groups: &[usize]) -> u64 {
    let n = pattern.len();
    // ways[g][i]: arrangements of groups[g..] into pattern[i..]
    let mut ways = vec![vec![0u64; n + 2]; groups.len() + 1];
    for i in (0..=n).rev() {
        if pattern[i..].iter().all(|&b| b != b'#') {
            ways[groups.len()][i] = 1;
        }
    }
    for g in (0..groups.len()).rev() {
        let size = groups[g];
        for i in (0..n).rev() {
            let mut count = 0;
            if pattern[i] != b'#' {
                count += ways[g][i + 1];
            }
            let end = i + size;
            let fits = end <= n
                && pattern[i..end].iter().all(|&b| b != b'.')
                && pattern.get(end) != Some(&b'#');
            if pattern[i] != b'.' && fits {
                count += ways[g + 1][(end + 1).min(n)];
            }
            ways[g][i] = count;
        }
    }
    ways[0][0]
}

fn sum_of_arrangements(input: &PuzzleInput, copies: usize) -> Result<Answer> {
    let rows = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (pattern, groups) = line
                .split_once(' ')
                .with_context(|| format!("invalid row {line:?}"))?;
            let groups = groups
                .split(',')
                .map(str::parse::<usize>)
                .collect::<Result<Vec<_>, _>>()?;
            let pattern = std::iter::repeat(pattern).take(copies).join("?");
            Ok((pattern, groups.repeat(copies)))
        })
        .collect::<Result<Vec<_>>>()?;
    let total: u64 = rows
        .par_iter()
        .map(|(pattern, groups)| arrangements(pattern.as_bytes(), groups))
        .sum();
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    sum_of_arrangements(input, 1)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    sum_of_arrangements(input, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ???.### 1,1,3
        .??..??...?##. 1,1,3
        ?#?#?#?#?#?#?#? 1,3,1,6
        ????.#...#... 4,1,1
        ????.######..#####. 1,6,5
        ?###???????? 3,2,1
    "};

    #[test]
    fn test_day12() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(21));
        assert_eq!(part_b(&input)?, Answer::from(525152));
        Ok(())
    }

    #[test]
    fn test_arrangements() {
        assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
        assert_eq!(arrangements(b"#", &[1]), 1);
        assert_eq!(arrangements(b"", &[1]), 0);
    }
}
