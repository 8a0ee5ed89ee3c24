use anyhow::{bail, Result};
use indexmap::IndexMap;
use memchr::memchr_iter;

use crate::{parse_usize_from_bytes, Answer, PuzzleInput};

fn hash(step: &[u8]) -> usize {
    step.iter().fold(0, |h, &b| (h + b as usize) * 17 % 256)
}

/// Comma separated steps of the initialization sequence.
fn steps(input: &PuzzleInput) -> Result<Vec<&[u8]>> {
    let line = input.single_line()?.as_bytes();
    let mut steps = Vec::new();
    let mut start = 0;
    for comma in memchr_iter(b',', line) {
        steps.push(&line[start..comma]);
        start = comma + 1;
    }
    steps.push(&line[start..]);
    Ok(steps)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let sum: usize = steps(input)?.into_iter().map(hash).sum();
    Ok(sum.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let mut boxes: Vec<IndexMap<&[u8], usize>> = vec![IndexMap::new(); 256];
    for step in steps(input)? {
        match step {
            [label @ .., b'-'] => {
                boxes[hash(label)].shift_remove(label);
            }
            [label @ .., b'=', focal_length @ b'1'..=b'9'] => {
                boxes[hash(label)].insert(label, parse_usize_from_bytes(&[*focal_length]));
            }
            _ => bail!("invalid step {:?}", String::from_utf8_lossy(step)),
        }
    }
    let power: usize = boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .values()
                .enumerate()
                .map(move |(slot, focal_length)| (b + 1) * (slot + 1) * focal_length)
        })
        .sum();
    Ok(power.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    #[test]
    fn test_day15() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(1320));
        assert_eq!(part_b(&input)?, Answer::from(145));
        assert_eq!(hash(b"HASH"), 52);
        Ok(())
    }
}
