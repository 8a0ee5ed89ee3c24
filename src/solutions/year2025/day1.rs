use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

const POSITIONS: i64 = 100;

/// Signed rotations: left is negative.
fn rotations(input: &PuzzleInput) -> Result<Vec<i64>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (direction, clicks) = line.split_at(1);
            let clicks: i64 = clicks.parse()?;
            Ok(match direction {
                "L" => -clicks,
                "R" => clicks,
                _ => bail!("invalid rotation {line:?}"),
            })
        })
        .collect()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let mut position = 50;
    let mut zeroes = 0;
    for rotation in rotations(input)? {
        position = (position + rotation).rem_euclid(POSITIONS);
        if position == 0 {
            zeroes += 1;
        }
    }
    Ok(zeroes.into())
}

/// Counts every click that lands on zero, also in the middle of a rotation.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let mut position = 50;
    let mut zeroes = 0;
    for rotation in rotations(input)? {
        let clicks = rotation.abs();
        // Clicks until the dial first shows zero.
        let first_zero = match (position, rotation > 0) {
            (0, _) => POSITIONS,
            (p, true) => POSITIONS - p,
            (p, false) => p,
        };
        if clicks >= first_zero {
            zeroes += 1 + (clicks - first_zero) / POSITIONS;
        }
        position = (position + rotation).rem_euclid(POSITIONS);
    }
    Ok(zeroes.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        L68
        L30
        R48
        L5
        R60
        L55
        L1
        L99
        R14
        L82
    "};

    #[test]
    fn test_day1() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(3));
        assert_eq!(part_b(&input)?, Answer::from(6));
        assert_eq!(part_b(&PuzzleInput::example("R1000\n"))?, Answer::from(10));
        Ok(())
    }
}
