use anyhow::{bail, Context, Result};
use itertools::Itertools;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Answer, PuzzleInput};

const MONKEY: &str = concat!(
    r"Monkey (\d+):\s+",
    r"Starting items: ([\d, ]*)\s+",
    r"Operation: new = old ([*+]) (old|\d+)\s+",
    r"Test: divisible by (\d+)\s+",
    r"If true: throw to monkey (\d+)\s+",
    r"If false: throw to monkey (\d+)",
);

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, worry: u64) -> u64 {
        match self {
            Operation::Add(n) => worry + n,
            Operation::Multiply(n) => worry * n,
            Operation::Square => worry * worry,
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    targets: [usize; 2],
    inspected: usize,
}

fn parse(input: &PuzzleInput) -> Result<Vec<Monkey>> {
    let pattern = Regex::new(MONKEY)?;
    let monkeys = input
        .groups()
        .iter()
        .enumerate()
        .map(|(id, group)| {
            let text = group.join("\n");
            let captures = pattern
                .captures(&text)
                .with_context(|| format!("invalid monkey description {text:?}"))?;
            if captures[1].parse::<usize>()? != id {
                bail!("monkeys are expected in order, found {} at {id}", &captures[1]);
            }
            let operation = match (&captures[3], &captures[4]) {
                ("*", "old") => Operation::Square,
                ("*", n) => Operation::Multiply(n.parse()?),
                ("+", n) => Operation::Add(n.parse()?),
                (op, n) => bail!("unsupported operation old {op} {n}"),
            };
            Ok(Monkey {
                items: captures[2]
                    .split(", ")
                    .filter(|item| !item.is_empty())
                    .map(str::parse)
                    .collect::<Result<_, _>>()?,
                operation,
                divisor: captures[5].parse()?,
                targets: [captures[7].parse()?, captures[6].parse()?],
                inspected: 0,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    for monkey in &monkeys {
        if monkey.targets.iter().any(|&target| target >= monkeys.len()) {
            bail!("monkey throws to a monkey that doesn't exist");
        }
    }
    Ok(monkeys)
}

/// Without relief, worry levels are kept modulo the product of every divisor since they're only
/// ever tested for divisibility.
fn monkey_business(input: &PuzzleInput, rounds: usize, relief: u64) -> Result<Answer> {
    let mut monkeys = parse(input)?;
    let modulus: u64 = monkeys.iter().map(|monkey| monkey.divisor).product();
    for round in 1..=rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            monkeys[i].inspected += items.len();
            let Monkey {
                operation,
                divisor,
                targets,
                ..
            } = monkeys[i];
            for worry in items {
                let mut worry = operation.apply(worry) / relief;
                if relief == 1 {
                    worry %= modulus;
                }
                let target = targets[usize::from(worry % divisor == 0)];
                trace!(monkey = i, worry, target, "item thrown");
                monkeys[target].items.push(worry);
            }
        }
        if round % 1000 == 0 || round == 20 {
            debug!(
                round,
                inspected = ?monkeys.iter().map(|monkey| monkey.inspected).collect_vec(),
                "after round"
            );
        }
    }
    let business: usize = monkeys
        .iter()
        .map(|monkey| monkey.inspected)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(2)
        .product();
    Ok(business.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    monkey_business(input, 20, 3)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    monkey_business(input, 10000, 1)
}
