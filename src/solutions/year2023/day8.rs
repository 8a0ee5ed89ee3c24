use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::{Answer, PuzzleInput};

struct Network<'a> {
    instructions: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

fn parse(input: &PuzzleInput) -> Result<Network<'_>> {
    let mut lines = input.lines().filter(|line| !line.is_empty());
    let instructions = lines.next().context("missing instructions")?.as_bytes();
    let nodes = lines
        .map(|line| {
            let (node, next) = line
                .split_once(" = ")
                .with_context(|| format!("invalid node {line:?}"))?;
            let (left, right) = next
                .trim_matches(&['(', ')'][..])
                .split_once(", ")
                .with_context(|| format!("invalid node {line:?}"))?;
            Ok((node, (left, right)))
        })
        .collect::<Result<_>>()?;
    Ok(Network { instructions, nodes })
}

impl Network<'_> {
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<usize> {
        let mut node = start;
        for (steps, &instruction) in self.instructions.iter().cycle().enumerate() {
            if done(node) {
                return Ok(steps);
            }
            let &(left, right) = self
                .nodes
                .get(node)
                .with_context(|| format!("unknown node {node}"))?;
            node = match instruction {
                b'L' => left,
                b'R' => right,
                _ => bail!("invalid instruction {:?}", instruction as char),
            };
        }
        bail!("no instructions")
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let network = parse(input)?;
    Ok(network.steps("AAA", |node| node == "ZZZ")?.into())
}

/// Every ghost runs in a cycle that passes its end node exactly at multiples of its first
/// arrival, so they all meet at the least common multiple.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let network = parse(input)?;
    let mut steps = 1;
    for start in network.nodes.keys().filter(|node| node.ends_with('A')) {
        steps = num::integer::lcm(steps, network.steps(start, |node| node.ends_with('Z'))?);
    }
    Ok(steps.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day8() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            RL

            AAA = (BBB, CCC)
            BBB = (DDD, EEE)
            CCC = (ZZZ, GGG)
            DDD = (DDD, DDD)
            EEE = (EEE, EEE)
            GGG = (GGG, GGG)
            ZZZ = (ZZZ, ZZZ)
        "});
        assert_eq!(part_a(&input)?, Answer::from(2));

        let input = PuzzleInput::example(indoc! {"
            LR

            11A = (11B, XXX)
            11B = (XXX, 11Z)
            11Z = (11B, XXX)
            22A = (22B, XXX)
            22B = (22C, 22C)
            22C = (22Z, 22Z)
            22Z = (22B, 22B)
            XXX = (XXX, XXX)
        "});
        assert_eq!(part_b(&input)?, Answer::from(6));
        Ok(())
    }
}
