use aho_corasick::AhoCorasick;
use anyhow::Result;

use crate::{Answer, PuzzleInput};

const DIGITS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
const SPELLED: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

fn calibration_sum(input: &PuzzleInput, spelled: bool) -> Result<Answer> {
    // NOTE: regex doesn't work since it doesn't support overlapping matches ("twone")
    let patterns: Vec<&str> = if spelled {
        DIGITS.iter().chain(SPELLED.iter()).copied().collect()
    } else {
        DIGITS.to_vec()
    };
    let ac = AhoCorasick::new(patterns)?;

    let mut sum = 0;
    for line in input.lines() {
        let mut first = None;
        let mut last = 0;
        for mat in ac.find_overlapping_iter(line) {
            let digit = mat.pattern().as_usize() % 9 + 1;
            first.get_or_insert(digit);
            last = digit;
        }
        if let Some(first) = first {
            sum += first * 10 + last;
        }
    }
    Ok(sum.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    calibration_sum(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    calibration_sum(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day1() -> Result<()> {
        let example_part1 = indoc! {"
            1abc2
            pqr3stu8vwx
            a1b2c3d4e5f
            treb7uchet
        "};
        assert_eq!(part_a(&PuzzleInput::example(example_part1))?, Answer::from(142));

        let example_part2 = indoc! {"
            two1nine
            eightwothree
            abcone2threexyz
            xtwone3four
            4nineeightseven2
            zoneight234
            7pqrstsixteen
        "};
        assert_eq!(part_b(&PuzzleInput::example(example_part2))?, Answer::from(281));
        assert_eq!(part_b(&PuzzleInput::example("twone\n"))?, Answer::from(21));
        Ok(())
    }
}
