use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Answer, PuzzleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcaster,
    FlipFlop,
    Conjunction,
}

#[derive(Debug)]
struct Module<'a> {
    kind: Kind,
    destinations: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy)]
struct Pulse<'a> {
    from: &'a str,
    to: &'a str,
    high: bool,
}

struct Machine<'a> {
    modules: FxHashMap<&'a str, Module<'a>>,
    flip_flops: FxHashMap<&'a str, bool>,
    memories: FxHashMap<&'a str, FxHashMap<&'a str, bool>>,
}

impl<'a> Machine<'a> {
    fn parse(input: &'a PuzzleInput) -> Result<Self> {
        let mut modules = FxHashMap::default();
        for line in input.lines().filter(|line| !line.is_empty()) {
            let (name, destinations) = line
                .split_once(" -> ")
                .with_context(|| format!("invalid module {line:?}"))?;
            let (kind, name) = match name.as_bytes().first() {
                Some(b'%') => (Kind::FlipFlop, &name[1..]),
                Some(b'&') => (Kind::Conjunction, &name[1..]),
                _ if name == "broadcaster" => (Kind::Broadcaster, name),
                _ => bail!("unknown module type {name:?}"),
            };
            let destinations = destinations.split(", ").collect();
            modules.insert(name, Module { kind, destinations });
        }
        let mut memories: FxHashMap<&str, FxHashMap<&str, bool>> = FxHashMap::default();
        for (&name, module) in &modules {
            for &destination in &module.destinations {
                if modules.get(destination).is_some_and(|m| m.kind == Kind::Conjunction) {
                    memories.entry(destination).or_default().insert(name, false);
                }
            }
        }
        Ok(Self {
            modules,
            flip_flops: FxHashMap::default(),
            memories,
        })
    }

    /// Pushes the button once, handing every pulse sent to `observe`.
    fn press(&mut self, mut observe: impl FnMut(Pulse<'a>)) {
        let mut queue = VecDeque::from([Pulse {
            from: "button",
            to: "broadcaster",
            high: false,
        }]);
        while let Some(pulse) = queue.pop_front() {
            observe(pulse);
            let Some(module) = self.modules.get(pulse.to) else {
                continue;
            };
            let output = match module.kind {
                Kind::Broadcaster => pulse.high,
                Kind::FlipFlop if pulse.high => continue,
                Kind::FlipFlop => {
                    let on = self.flip_flops.entry(pulse.to).or_default();
                    *on = !*on;
                    *on
                }
                Kind::Conjunction => {
                    let memory = self.memories.entry(pulse.to).or_default();
                    memory.insert(pulse.from, pulse.high);
                    !memory.values().all(|&high| high)
                }
            };
            for &destination in &module.destinations {
                queue.push_back(Pulse {
                    from: pulse.to,
                    to: destination,
                    high: output,
                });
            }
        }
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let mut machine = Machine::parse(input)?;
    let (mut low, mut high) = (0u64, 0u64);
    for _ in 0..1000 {
        machine.press(|pulse| match pulse.high {
            true => high += 1,
            false => low += 1,
        });
    }
    Ok((low * high).into())
}

/// `rx` is fed by a single conjunction whose inputs are driven by independent counters; each
/// sends its first high pulse at the end of its cycle, so they line up at the lcm.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    if input.is_example() {
        bail!("the examples have no rx module");
    }
    let mut machine = Machine::parse(input)?;
    let feeder = machine
        .modules
        .iter()
        .find(|(_, module)| module.destinations.contains(&"rx"))
        .map(|(&name, _)| name)
        .context("nothing feeds rx")?;
    let inputs = machine.memories.get(feeder).map_or(0, |memory| memory.len());
    if inputs == 0 {
        bail!("{feeder} is not a conjunction with inputs");
    }

    let mut cycles: FxHashMap<&str, u64> = FxHashMap::default();
    let mut presses = 0;
    while cycles.len() < inputs {
        presses += 1;
        machine.press(|pulse| {
            if pulse.to == feeder && pulse.high {
                cycles.entry(pulse.from).or_insert(presses);
            }
        });
        if presses > 1_000_000 {
            bail!("inputs of {feeder} do not cycle");
        }
    }
    debug!(?cycles, "found input cycles");
    Ok(cycles.values().fold(1, |acc, &cycle| num::integer::lcm(acc, cycle)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day20() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            broadcaster -> a, b, c
            %a -> b
            %b -> c
            %c -> inv
            &inv -> a
        "});
        assert_eq!(part_a(&input)?, Answer::from(32000000));
        assert!(part_b(&input).is_err());

        let input = PuzzleInput::example(indoc! {"
            broadcaster -> a
            %a -> inv, con
            &inv -> b
            %b -> con
            &con -> output
        "});
        assert_eq!(part_a(&input)?, Answer::from(11687500));
        Ok(())
    }

    #[test]
    fn test_presses_until_rx() -> Result<()> {
        let input = PuzzleInput::real(indoc! {"
            broadcaster -> a1, b1
            %a1 -> ia
            &ia -> hub
            %b1 -> b2
            %b2 -> b3
            %b3 -> ib
            &ib -> hub
            &hub -> rx
        "});
        assert_eq!(part_b(&input)?, Answer::from(8));
        Ok(())
    }
}
