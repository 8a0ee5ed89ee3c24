use anyhow::{bail, Context, Result};

use crate::{Answer, PuzzleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl Operation {
    fn from_char(c: char) -> Result<Self> {
        Ok(match c {
            '+' => Operation::Add,
            '*' => Operation::Multiply,
            _ => bail!("invalid operation {c:?}"),
        })
    }

    fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Operation::Add => numbers.iter().sum(),
            Operation::Multiply => numbers.iter().product(),
        }
    }
}

/// Number rows and the operator row, all padded to the same width.
fn worksheet(input: &PuzzleInput) -> Result<(Vec<Vec<u8>>, Vec<u8>)> {
    let mut rows: Vec<Vec<u8>> = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.as_bytes().to_vec())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, b' ');
    }
    let operators = rows.pop().context("empty worksheet")?;
    Ok((rows, operators))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
    let Some((operators, numbers)) = lines.split_last() else {
        bail!("empty worksheet");
    };
    let numbers = numbers
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<u64>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0;
    for (column, operator) in operators.split_whitespace().enumerate() {
        let operator = Operation::from_char(operator.chars().next().unwrap_or(' '))?;
        let operands = numbers
            .iter()
            .map(|row| row.get(column).copied())
            .collect::<Option<Vec<_>>>()
            .with_context(|| format!("column {column} is missing numbers"))?;
        total += operator.apply(&operands);
    }
    Ok(total.into())
}

/// Numbers are read top to bottom within a single character column.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (rows, operators) = worksheet(input)?;
    let mut total = 0;
    let mut operator = None;
    let mut operands = Vec::new();
    for x in 0..=operators.len() {
        let digits: Vec<u8> = rows
            .iter()
            .filter_map(|row| row.get(x).copied())
            .filter(u8::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            if let Some(op) = operator.take() {
                total += Operation::apply(op, &operands);
            }
            operands.clear();
            continue;
        }
        if let Some(&c) = operators.get(x).filter(|&&c| c != b' ') {
            operator = Some(Operation::from_char(c as char)?);
        }
        operands.push(digits.iter().fold(0, |n, d| n * 10 + u64::from(d - b'0')));
    }
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "123 328  51 64 \n 45 64  387 23 \n  6 98  215 314\n*   +   *   +  \n";

    #[test]
    fn test_day6() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(4277556));
        assert_eq!(part_b(&input)?, Answer::from(3263827));
        Ok(())
    }
}
