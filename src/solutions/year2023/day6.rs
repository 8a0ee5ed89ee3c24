use anyhow::{bail, Result};

use crate::{numbers_in, Answer, PuzzleInput};

/// Number of integer hold times `h` with `h * (time - h) > record`, solved as a quadratic.
fn ways_to_win(time: i64, record: i64) -> i64 {
    let (t, r) = (time as f64, record as f64);
    let discriminant = t * t - 4.0 * r;
    if discriminant < 0.0 {
        return 0;
    }
    let root = discriminant.sqrt();
    let mut low = ((t - root) / 2.0).floor() as i64 + 1;
    let mut high = ((t + root) / 2.0).ceil() as i64 - 1;
    // Float rounding may be off by one at the boundaries.
    while low * (time - low) <= record && low <= high {
        low += 1;
    }
    while high * (time - high) <= record && high >= low {
        high -= 1;
    }
    (high - low + 1).max(0)
}

fn races(input: &PuzzleInput) -> Result<(Vec<i64>, Vec<i64>)> {
    let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
    let [times, records] = lines.as_slice() else {
        bail!("expected a time and a distance line");
    };
    Ok((numbers_in(times)?, numbers_in(records)?))
}

fn joined(numbers: &[i64]) -> Result<i64> {
    Ok(numbers.iter().map(i64::to_string).collect::<String>().parse()?)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (times, records) = races(input)?;
    let product: i64 = times
        .iter()
        .zip(&records)
        .map(|(&time, &record)| ways_to_win(time, record))
        .product();
    Ok(product.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (times, records) = races(input)?;
    Ok(ways_to_win(joined(&times)?, joined(&records)?).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Time:      7  15   30
        Distance:  9  40  200
    "};

    #[test]
    fn test_day6() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(288));
        assert_eq!(part_b(&input)?, Answer::from(71503));
        Ok(())
    }
}
