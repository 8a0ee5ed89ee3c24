use anyhow::{bail, Result};
use itertools::iproduct;

use crate::{Answer, PuzzleInput};

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let mut locks = Vec::new();
    let mut keys = Vec::new();
    let mut space = 0;
    for schematic in input.groups() {
        let (Some(first), true) = (schematic.first(), schematic.len() > 2) else {
            bail!("schematic {schematic:?} is too small");
        };
        space = schematic.len() - 2;
        let mut heights = vec![0usize; first.len()];
        for row in &schematic[1..schematic.len() - 1] {
            for (height, b) in heights.iter_mut().zip(row.bytes()) {
                if b == b'#' {
                    *height += 1;
                }
            }
        }
        match first.bytes().all(|b| b == b'#') {
            true => locks.push(heights),
            false => keys.push(heights),
        }
    }
    if locks.is_empty() || keys.is_empty() {
        bail!("expected both locks and keys");
    }
    let fits = iproduct!(&locks, &keys)
        .filter(|(lock, key)| lock.iter().zip(key.iter()).all(|(l, k)| l + k <= space))
        .count();
    Ok(fits.into())
}

pub fn part_b(_input: &PuzzleInput) -> Result<Answer> {
    Ok("no part two".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #####
        .####
        .####
        .####
        .#.#.
        .#...
        .....

        #####
        ##.##
        .#.##
        ...##
        ...#.
        ...#.
        .....

        .....
        #....
        #....
        #...#
        #.#.#
        #.###
        #####

        .....
        .....
        #.#..
        ###..
        ###.#
        ###.#
        #####

        .....
        .....
        .....
        #....
        #.#..
        #.#.#
        #####
    "};

    #[test]
    fn test_day25() -> Result<()> {
        assert_eq!(part_a(&PuzzleInput::example(EXAMPLE))?, Answer::from(3));
        Ok(())
    }
}
