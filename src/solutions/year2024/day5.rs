use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::{Answer, PuzzleInput};

struct PrintQueue {
    /// (before, after) page pairs.
    rules: FxHashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn parse(input: &PuzzleInput) -> Result<Self> {
        let groups = input.groups();
        let [rules, updates] = groups.as_slice() else {
            bail!("expected ordering rules and updates separated by an empty line");
        };
        let rules = rules
            .iter()
            .map(|line| parse_rule(line))
            .collect::<Result<FxHashSet<_>>>()?;
        let updates = updates
            .iter()
            .map(|line| line.split(',').map(str::parse::<u32>).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules, updates })
    }

    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .windows(2)
            .all(|pair| self.compare(pair[0], pair[1]) != Ordering::Greater)
    }
}

fn parse_rule(line: &str) -> Result<(u32, u32)> {
    let (before, after) = line
        .split_once('|')
        .with_context(|| format!("invalid rule {line:?}"))?;
    Ok((before.parse()?, after.parse()?))
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let queue = PrintQueue::parse(input)?;
    let sum: u32 = queue
        .updates
        .iter()
        .filter(|update| queue.is_ordered(update))
        .map(|update| middle(update))
        .sum();
    Ok(sum.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let queue = PrintQueue::parse(input)?;
    let sum: u32 = queue
        .updates
        .iter()
        .filter(|update| !queue.is_ordered(update))
        .map(|update| {
            let mut update = update.clone();
            update.sort_by(|&a, &b| queue.compare(a, b));
            middle(&update)
        })
        .sum();
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        47|53
        97|13
        97|61
        97|47
        75|29
        61|13
        75|53
        29|13
        97|29
        53|29
        61|53
        97|53
        61|29
        47|13
        75|47
        97|75
        47|61
        75|61
        47|29
        75|13
        53|13

        75,47,61,53,29
        97,61,53,29,13
        75,29,13
        75,97,47,61,53
        61,13,29
        97,13,75,29,47
    "};

    #[test]
    fn test_day5() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(143));
        assert_eq!(part_b(&input)?, Answer::from(123));
        Ok(())
    }
}
