use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{Answer, PuzzleInput};

fn blink(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        (stone / half, Some(stone % half))
    } else {
        (stone * 2024, None)
    }
}

/// Stones never interact, so only the number of stones per engraving matters.
fn stones_after(input: &PuzzleInput, blinks: usize) -> Result<Answer> {
    let mut stones: FxHashMap<u64, usize> = FxHashMap::default();
    for stone in input.single_line()?.split_whitespace() {
        *stones.entry(stone.parse()?).or_default() += 1;
    }
    for _ in 0..blinks {
        let mut next: FxHashMap<u64, usize> = FxHashMap::default();
        for (stone, count) in stones {
            let (left, right) = blink(stone);
            *next.entry(left).or_default() += count;
            if let Some(right) = right {
                *next.entry(right).or_default() += count;
            }
        }
        stones = next;
    }
    Ok(stones.values().sum::<usize>().into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    stones_after(input, if input.is_example() { 6 } else { 25 })
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    stones_after(input, if input.is_example() { 6 } else { 75 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day11() -> Result<()> {
        assert_eq!(part_a(&PuzzleInput::example("125 17\n"))?, Answer::from(22));
        assert_eq!(part_a(&PuzzleInput::real("125 17\n"))?, Answer::from(55312));
        Ok(())
    }

    #[test]
    fn test_blink() {
        assert_eq!(blink(0), (1, None));
        assert_eq!(blink(1000), (10, Some(0)));
        assert_eq!(blink(1), (2024, None));
    }
}
