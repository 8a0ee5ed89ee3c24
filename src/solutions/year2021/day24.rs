use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use tracing::debug;

use crate::{Answer, PuzzleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    W,
    X,
    Y,
    Z,
}

impl FromStr for Register {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "w" => Register::W,
            "x" => Register::X,
            "y" => Register::Y,
            "z" => Register::Z,
            _ => bail!("unknown register {s:?}"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Register(Register),
    Value(i64),
}

impl FromStr for Operand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse() {
            Ok(value) => Ok(Operand::Value(value)),
            Err(_) => Ok(Operand::Register(s.parse()?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Inp(Register),
    Add(Register, Operand),
    Mul(Register, Operand),
    Div(Register, Operand),
    Mod(Register, Operand),
    Eql(Register, Operand),
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        Ok(match parts.as_slice() {
            ["inp", a] => Instruction::Inp(a.parse()?),
            ["add", a, b] => Instruction::Add(a.parse()?, b.parse()?),
            ["mul", a, b] => Instruction::Mul(a.parse()?, b.parse()?),
            ["div", a, b] => Instruction::Div(a.parse()?, b.parse()?),
            ["mod", a, b] => Instruction::Mod(a.parse()?, b.parse()?),
            ["eql", a, b] => Instruction::Eql(a.parse()?, b.parse()?),
            _ => bail!("invalid instruction {line:?}"),
        })
    }
}

/// Arithmetic logic unit with four registers.
#[derive(Debug, Default)]
struct Alu {
    registers: [i64; 4],
}

impl Alu {
    fn get(&self, register: Register) -> i64 {
        self.registers[register as usize]
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Register(register) => self.get(register),
            Operand::Value(value) => value,
        }
    }

    fn run(&mut self, program: &[Instruction], inputs: &[i64]) -> Result<()> {
        let mut inputs = inputs.iter();
        for &instruction in program {
            let (target, result) = match instruction {
                Instruction::Inp(a) => (a, *inputs.next().context("ran out of input")?),
                Instruction::Add(a, b) => (a, self.get(a) + self.value(b)),
                Instruction::Mul(a, b) => (a, self.get(a) * self.value(b)),
                Instruction::Div(a, b) => {
                    let divisor = self.value(b);
                    ensure!(divisor != 0, "division by zero");
                    (a, self.get(a) / divisor)
                }
                Instruction::Mod(a, b) => {
                    let (value, modulus) = (self.get(a), self.value(b));
                    ensure!(value >= 0 && modulus > 0, "invalid modulo {value} % {modulus}");
                    (a, value % modulus)
                }
                Instruction::Eql(a, b) => (a, i64::from(self.get(a) == self.value(b))),
            };
            self.registers[target as usize] = result;
        }
        Ok(())
    }
}

fn parse(input: &PuzzleInput) -> Result<Vec<Instruction>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}

/// The parameters that differ between the fourteen input blocks.
#[derive(Debug, Clone, Copy)]
struct Block {
    pops: bool,
    check: i64,
    offset: i64,
}

const BLOCK_LEN: usize = 18;

fn blocks(program: &[Instruction]) -> Result<Vec<Block>> {
    ensure!(
        program.len() == 14 * BLOCK_LEN,
        "expected 14 blocks of {BLOCK_LEN} instructions"
    );
    program
        .chunks(BLOCK_LEN)
        .map(|block| {
            use Instruction::*;
            use Operand::Value;
            use Register::*;
            match (block[0], block[4], block[5], block[15]) {
                (Inp(W), Div(Z, Value(divisor)), Add(X, Value(check)), Add(Y, Value(offset)))
                    if divisor == 1 || divisor == 26 =>
                {
                    Ok(Block {
                        pops: divisor == 26,
                        check,
                        offset,
                    })
                }
                _ => bail!("unexpected block layout"),
            }
        })
        .collect()
}

/// Pairs every pushing block with the block that pops it; the digits of a pair must differ by a
/// fixed amount, from which `pick` chooses the digits.
fn model_number(blocks: &[Block], pick: impl Fn(i64) -> (i64, i64)) -> Result<Vec<i64>> {
    let mut digits = vec![0; blocks.len()];
    let mut stack = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if !block.pops {
            stack.push(i);
            continue;
        }
        let pushed = stack.pop().context("block pops an empty stack")?;
        // digits[i] = digits[pushed] + delta
        let delta = blocks[pushed].offset + block.check;
        ensure!(delta.abs() < 9, "blocks {pushed} and {i} can't be satisfied");
        let (first, second) = pick(delta);
        debug!(pushed, popped = i, delta, "paired blocks");
        digits[pushed] = first;
        digits[i] = second;
    }
    ensure!(stack.is_empty(), "unbalanced blocks");
    Ok(digits)
}

fn solve(input: &PuzzleInput, pick: impl Fn(i64) -> (i64, i64)) -> Result<Answer> {
    let program = parse(input)?;
    let digits = model_number(&blocks(&program)?, pick)?;
    let mut alu = Alu::default();
    alu.run(&program, &digits)?;
    if alu.get(Register::Z) != 0 {
        bail!("model number {digits:?} is rejected by MONAD");
    }
    Ok(digits.iter().fold(0, |n, d| n * 10 + d).into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    solve(input, |delta| if delta >= 0 { (9 - delta, 9) } else { (9, 9 + delta) })
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    solve(input, |delta| if delta >= 0 { (1, 1 + delta) } else { (1 - delta, 1) })
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::{formatdoc, indoc};

    /// (divisor, check, offset) for each of the fourteen blocks.
    const BLOCKS: [(i64, i64, i64); 14] = [
        (1, 12, 5),
        (1, 11, 1),
        (26, 2, 0),
        (26, -8, 0),
        (1, 10, 7),
        (26, -7, 0),
        (1, 13, 2),
        (26, -6, 0),
        (1, 14, 0),
        (26, 0, 0),
        (1, 10, 3),
        (26, -1, 0),
        (1, 12, 8),
        (26, -16, 0),
    ];

    fn monad() -> String {
        BLOCKS
            .iter()
            .map(|(divisor, check, offset)| {
                formatdoc! {"
                    inp w
                    mul x 0
                    add x z
                    mod x 26
                    div z {divisor}
                    add x {check}
                    eql x w
                    eql x 0
                    mul y 0
                    add y 25
                    mul y x
                    add y 1
                    mul z y
                    mul y 0
                    add y w
                    add y {offset}
                    mul y x
                    add z y
                ", divisor = divisor, check = check, offset = offset}
            })
            .collect()
    }

    #[test]
    fn test_day24() -> Result<()> {
        let input = PuzzleInput::real(monad());
        assert_eq!(part_a(&input)?, Answer::from(96969995997991_i64));
        assert_eq!(part_b(&input)?, Answer::from(41411151111391_i64));
        Ok(())
    }

    #[test]
    fn test_alu() -> Result<()> {
        let program = parse(&PuzzleInput::example(indoc! {"
            inp z
            inp x
            mul z 3
            eql z x
        "}))?;
        let mut alu = Alu::default();
        alu.run(&program, &[3, 9])?;
        assert_eq!(alu.get(Register::Z), 1);
        alu.run(&program, &[3, 8])?;
        assert_eq!(alu.get(Register::Z), 0);
        Ok(())
    }

    #[test]
    fn test_alu_rejects_negative_modulo() -> Result<()> {
        let program = parse(&PuzzleInput::example("inp x\nmod x 5\n"))?;
        assert!(Alu::default().run(&program, &[-1]).is_err());
        Ok(())
    }
}
