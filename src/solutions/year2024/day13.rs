use anyhow::{bail, Result};
use itertools::Itertools;

use crate::{numbers_in, Answer, PuzzleInput};

struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn parse(input: &PuzzleInput) -> Result<Vec<Machine>> {
    input
        .groups()
        .iter()
        .map(|group| {
            let numbers: Vec<i64> = group
                .iter()
                .map(|line| numbers_in(line))
                .flatten_ok()
                .collect::<Result<_>>()?;
            let &[ax, ay, bx, by, px, py] = numbers.as_slice() else {
                bail!("invalid claw machine {group:?}");
            };
            Ok(Machine {
                a: (ax, ay),
                b: (bx, by),
                prize: (px, py),
            })
        })
        .collect()
}

impl Machine {
    /// Cramer's rule; the two buttons are never collinear in the puzzle input.
    fn tokens(&self, offset: i64) -> Option<i64> {
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }
        let a = px * self.b.1 - py * self.b.0;
        let b = self.a.0 * py - self.a.1 * px;
        if a % det != 0 || b % det != 0 {
            return None;
        }
        let (a, b) = (a / det, b / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

fn fewest_tokens(input: &PuzzleInput, offset: i64) -> Result<Answer> {
    let tokens: i64 = parse(input)?.iter().filter_map(|m| m.tokens(offset)).sum();
    Ok(tokens.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    fewest_tokens(input, 0)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    fewest_tokens(input, 10_000_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Button A: X+94, Y+34
        Button B: X+22, Y+67
        Prize: X=8400, Y=5400

        Button A: X+26, Y+66
        Button B: X+67, Y+21
        Prize: X=12748, Y=12176

        Button A: X+17, Y+86
        Button B: X+84, Y+37
        Prize: X=7870, Y=6450

        Button A: X+69, Y+23
        Button B: X+27, Y+71
        Prize: X=18641, Y=10279
    "};

    #[test]
    fn test_day13() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(480));
        assert_eq!(part_b(&input)?, Answer::from(875318608908_i64));
        Ok(())
    }
}
