use anyhow::{bail, Context, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::{Answer, PuzzleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    And,
    Or,
    Xor,
}

#[derive(Debug)]
struct Gate<'a> {
    inputs: [&'a str; 2],
    operation: Operation,
    output: &'a str,
}

impl Gate<'_> {
    fn takes_inputs(&self) -> bool {
        self.inputs.iter().all(|w| w.starts_with('x') || w.starts_with('y'))
    }

    fn first_bit(&self) -> bool {
        self.inputs.iter().all(|w| w.ends_with("00"))
    }
}

struct Device<'a> {
    initial: FxHashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
}

fn parse(input: &PuzzleInput) -> Result<Device<'_>> {
    let groups = input.groups();
    let [initial, gates] = groups.as_slice() else {
        bail!("expected initial wire values and gates");
    };
    let initial = initial
        .iter()
        .map(|line| {
            let (wire, value) = line
                .split_once(": ")
                .with_context(|| format!("invalid wire {line:?}"))?;
            Ok((wire, value == "1"))
        })
        .collect::<Result<_>>()?;
    let gates = gates
        .iter()
        .map(|line| {
            let Some((a, operation, b, "->", output)) = line.split_whitespace().collect_tuple()
            else {
                bail!("invalid gate {line:?}");
            };
            let operation = match operation {
                "AND" => Operation::And,
                "OR" => Operation::Or,
                "XOR" => Operation::Xor,
                _ => bail!("unknown operation {operation:?}"),
            };
            Ok(Gate {
                inputs: [a, b],
                operation,
                output,
            })
        })
        .collect::<Result<_>>()?;
    Ok(Device { initial, gates })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let device = parse(input)?;
    let mut wires = device.initial.clone();
    let mut pending: Vec<&Gate> = device.gates.iter().collect();
    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|gate| {
            let (Some(&a), Some(&b)) = (wires.get(gate.inputs[0]), wires.get(gate.inputs[1])) else {
                return true;
            };
            let value = match gate.operation {
                Operation::And => a && b,
                Operation::Or => a || b,
                Operation::Xor => a != b,
            };
            wires.insert(gate.output, value);
            false
        });
        if pending.len() == before {
            bail!("{before} gates never receive their inputs");
        }
    }
    let z = wires
        .iter()
        .filter(|(wire, _)| wire.starts_with('z'))
        .sorted()
        .rev()
        .fold(0u64, |z, (_, &bit)| z << 1 | bit as u64);
    Ok(z.into())
}

/// The device is meant to be a ripple-carry adder; gates wired against that structure
/// have swapped outputs.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    if input.is_example() {
        bail!("the example device is not an adder");
    }
    let device = parse(input)?;
    let last_z = device
        .gates
        .iter()
        .map(|gate| gate.output)
        .filter(|wire| wire.starts_with('z'))
        .max()
        .context("device has no output wires")?;
    let feeds = |wire: &str, operation: Operation| {
        device
            .gates
            .iter()
            .any(|gate| {
                gate.operation == operation && gate.inputs.iter().any(|&input| input == wire)
            })
    };
    let swapped = device
        .gates
        .iter()
        .filter(|gate| {
            let to_z = gate.output.starts_with('z');
            match gate.operation {
                _ if to_z && gate.output != last_z && gate.operation != Operation::Xor => true,
                Operation::Xor if gate.first_bit() => gate.output != "z00",
                Operation::Xor if !gate.takes_inputs() => !to_z,
                Operation::Xor => !feeds(gate.output, Operation::Xor),
                Operation::And => !gate.first_bit() && !feeds(gate.output, Operation::Or),
                Operation::Or => false,
            }
        })
        .map(|gate| gate.output)
        .sorted()
        .join(",");
    Ok(swapped.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day24() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            x00: 1
            x01: 1
            x02: 1
            y00: 0
            y01: 1
            y02: 0

            x00 AND y00 -> z00
            x01 XOR y01 -> z01
            x02 OR y02 -> z02
        "});
        assert_eq!(part_a(&input)?, Answer::from(4));
        assert!(part_b(&input).is_err());
        Ok(())
    }

    #[test]
    fn test_swapped_adder_wires() -> Result<()> {
        // Two-bit adder with the sum and carry of bit 0 swapped.
        let input = PuzzleInput::real(indoc! {"
            x00: 0
            x01: 0
            y00: 0
            y01: 0

            x00 XOR y00 -> c00
            x00 AND y00 -> z00
            x01 XOR y01 -> s01
            s01 XOR c00 -> z01
            x01 AND y01 -> a01
            s01 AND c00 -> b01
            a01 OR b01 -> z02
        "});
        assert_eq!(part_b(&input)?, Answer::from("c00,z00"));
        Ok(())
    }
}
