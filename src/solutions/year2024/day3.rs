use anyhow::Result;
use regex::Regex;

use crate::{Answer, PuzzleInput};

fn run(text: &str, conditionals: bool) -> Result<u64> {
    let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;
    let mut enabled = true;
    let mut sum = 0;
    for caps in re.captures_iter(text) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = !conditionals,
            _ if enabled => sum += caps[1].parse::<u64>()? * caps[2].parse::<u64>()?,
            _ => {}
        }
    }
    Ok(sum)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok(run(input.text(), false)?.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    Ok(run(input.text(), true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day3() -> Result<()> {
        let example_a =
            "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))\n";
        let example_b =
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))\n";
        assert_eq!(part_a(&PuzzleInput::example(example_a))?, Answer::from(161));
        assert_eq!(part_b(&PuzzleInput::example(example_b))?, Answer::from(48));
        let toggled = PuzzleInput::example("don't()\nmul(1,1)\ndo()mul(2,3)");
        assert_eq!(part_b(&toggled)?, Answer::from(6));
        Ok(())
    }
}
