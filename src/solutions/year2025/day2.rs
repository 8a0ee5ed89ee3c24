use anyhow::{Context, Result};

use crate::{range::Interval, Answer, PuzzleInput};

fn id_ranges(input: &PuzzleInput) -> Result<Vec<Interval>> {
    input
        .single_line()?
        .split(',')
        .map(|range| {
            let (start, end) = range
                .split_once('-')
                .with_context(|| format!("invalid id range {range:?}"))?;
            Ok(Interval::inclusive(start.parse()?, end.parse()?))
        })
        .collect()
}

/// Whether the decimal digits of `id` are one block repeated `times` times.
fn repeated(id: &str, times: usize) -> bool {
    let len = id.len();
    if len % times != 0 {
        return false;
    }
    let block = &id[..len / times];
    (1..times).all(|i| &id[i * block.len()..(i + 1) * block.len()] == block)
}

fn sum_invalid(input: &PuzzleInput, invalid: impl Fn(&str) -> bool) -> Result<Answer> {
    let mut sum = 0i64;
    for range in id_ranges(input)? {
        for id in range.start..range.stop {
            if invalid(&id.to_string()) {
                sum += id;
            }
        }
    }
    Ok(sum.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    sum_invalid(input, |id| repeated(id, 2))
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    sum_invalid(input, |id| (2..=id.len()).any(|times| repeated(id, times)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
        1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
        824824821-824824827,2121212118-2121212124\n";

    #[test]
    fn test_day2() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(1227775554_i64));
        assert_eq!(part_b(&input)?, Answer::from(4174379265_i64));
        Ok(())
    }

    #[test]
    fn test_repeated() {
        assert!(repeated("123123", 2));
        assert!(repeated("1111111", 7));
        assert!(!repeated("12312", 2));
        assert!(!repeated("121213", 3));
    }
}
