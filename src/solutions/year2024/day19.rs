use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

struct Onsen<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
}

fn parse(input: &PuzzleInput) -> Result<Onsen<'_>> {
    let groups = input.groups();
    let [patterns, designs] = groups.as_slice() else {
        bail!("expected towel patterns and designs");
    };
    Ok(Onsen {
        patterns: patterns.iter().flat_map(|line| line.split(", ")).collect(),
        designs: designs.clone(),
    })
}

/// Number of ways `design` can be made from the patterns, counted per suffix.
fn arrangements(design: &str, patterns: &[&str]) -> u64 {
    let mut ways = vec![0u64; design.len() + 1];
    ways[design.len()] = 1;
    for start in (0..design.len()).rev() {
        ways[start] = patterns
            .iter()
            .filter(|pattern| design[start..].starts_with(**pattern))
            .map(|pattern| ways[start + pattern.len()])
            .sum();
    }
    ways[0]
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let onsen = parse(input)?;
    let possible = onsen
        .designs
        .iter()
        .filter(|design| arrangements(design, &onsen.patterns) > 0)
        .count();
    Ok(possible.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let onsen = parse(input)?;
    let total: u64 = onsen
        .designs
        .iter()
        .map(|design| arrangements(design, &onsen.patterns))
        .sum();
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        r, wr, b, g, bwu, rb, gb, br

        brwrr
        bggr
        gbbr
        rrbgbr
        ubwu
        bwurrg
        brgr
        bbrwb
    "};

    #[test]
    fn test_day19() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(6));
        assert_eq!(part_b(&input)?, Answer::from(16));
        Ok(())
    }
}
