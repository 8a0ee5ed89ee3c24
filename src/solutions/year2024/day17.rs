use anyhow::{bail, Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::{numbers_in, Answer, PuzzleInput};

/// Division by a power of two; shifting everything out leaves zero.
fn shift(value: u64, by: u64) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|by| value.checked_shr(by))
        .unwrap_or(0)
}

#[derive(Debug, Clone)]
struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

impl Computer {
    fn combo(&self, registers: &[u64; 3], operand: u8) -> Result<u64> {
        Ok(match operand {
            0..=3 => operand as u64,
            4..=6 => registers[(operand - 4) as usize],
            _ => bail!("invalid combo operand {operand}"),
        })
    }

    fn run(&self, a: u64) -> Result<Vec<u8>> {
        let mut registers = [a, self.registers[1], self.registers[2]];
        let mut output = Vec::new();
        let mut ip = 0;
        while let (Some(&opcode), Some(&operand)) =
            (self.program.get(ip), self.program.get(ip + 1))
        {
            ip += 2;
            match opcode {
                0 => registers[0] = shift(registers[0], self.combo(&registers, operand)?),
                1 => registers[1] ^= operand as u64,
                2 => registers[1] = self.combo(&registers, operand)? % 8,
                3 if registers[0] != 0 => ip = operand as usize,
                3 => {}
                4 => registers[1] ^= registers[2],
                5 => output.push((self.combo(&registers, operand)? % 8) as u8),
                6 => registers[1] = shift(registers[0], self.combo(&registers, operand)?),
                7 => registers[2] = shift(registers[0], self.combo(&registers, operand)?),
                _ => bail!("invalid opcode {opcode}"),
            }
        }
        Ok(output)
    }
}

fn parse(input: &PuzzleInput) -> Result<Computer> {
    let groups = input.groups();
    let [registers, program] = groups.as_slice() else {
        bail!("expected registers and a program");
    };
    let registers: Vec<u64> = registers
        .iter()
        .map(|line| {
            numbers_in(line)?
                .first()
                .map(|&v| v as u64)
                .context("register without value")
        })
        .collect::<Result<_>>()?;
    let registers: [u64; 3] = registers
        .try_into()
        .map_err(|registers| anyhow::anyhow!("expected three registers, got {registers:?}"))?;
    let program = program
        .iter()
        .map(|line| numbers_in(line))
        .flatten_ok()
        .map(|v| u8::try_from(v?).context("instruction out of range"))
        .collect::<Result<_>>()?;
    Ok(Computer { registers, program })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let computer = parse(input)?;
    Ok(computer.run(computer.registers[0])?.iter().join(",").into())
}

/// The program consumes A three bits per output digit, so A can be rebuilt from the last
/// output digit backwards.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let computer = parse(input)?;
    let mut candidates = vec![0u64];
    for i in (0..computer.program.len()).rev() {
        let mut next = Vec::new();
        for candidate in candidates {
            for digit in 0..8 {
                let a = candidate * 8 + digit;
                if computer.run(a)? == computer.program[i..] {
                    next.push(a);
                }
            }
        }
        debug!(position = i, candidates = next.len(), "narrowed register A");
        candidates = next;
    }
    let a = candidates.into_iter().min().context("no value of A reproduces the program")?;
    Ok(a.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day17() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            Register A: 729
            Register B: 0
            Register C: 0

            Program: 0,1,5,4,3,0
        "});
        assert_eq!(part_a(&input)?, Answer::from("4,6,3,5,6,3,5,2,1,0"));

        let input = PuzzleInput::example(indoc! {"
            Register A: 2024
            Register B: 0
            Register C: 0

            Program: 0,3,5,4,3,0
        "});
        assert_eq!(part_b(&input)?, Answer::from(117440));
        Ok(())
    }

    #[test]
    fn test_instructions() -> Result<()> {
        let computer = Computer {
            registers: [10, 0, 0],
            program: vec![5, 0, 5, 1, 5, 4],
        };
        assert_eq!(computer.run(10)?, vec![0, 1, 2]);
        Ok(())
    }
}
