use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

use crate::{numbers_in, Answer, PuzzleInput};

#[derive(Debug, Clone, Copy)]
struct Brick {
    low: [i64; 3],
    high: [i64; 3],
}

/// Settled bricks with, per brick, the bricks directly below and above it.
struct Stack {
    supported_by: Vec<Vec<usize>>,
    supports: Vec<Vec<usize>>,
}

fn settle(input: &PuzzleInput) -> Result<Stack> {
    let mut bricks = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?.as_slice() {
            &[x1, y1, z1, x2, y2, z2] => Ok(Brick {
                low: [x1.min(x2), y1.min(y2), z1.min(z2)],
                high: [x1.max(x2), y1.max(y2), z1.max(z2)],
            }),
            _ => bail!("invalid brick {line:?}"),
        })
        .collect::<Result<Vec<_>>>()?;
    bricks.sort_unstable_by_key(|brick| brick.low[2]);

    // Highest settled brick per (x, y) column.
    let mut top: FxHashMap<(i64, i64), (i64, usize)> = FxHashMap::default();
    let mut supported_by = vec![Vec::new(); bricks.len()];
    let mut supports = vec![Vec::new(); bricks.len()];
    for (i, brick) in bricks.iter().enumerate() {
        let columns: Vec<(i64, i64)> = (brick.low[0]..=brick.high[0])
            .flat_map(|x| (brick.low[1]..=brick.high[1]).map(move |y| (x, y)))
            .collect();
        let floor = columns
            .iter()
            .filter_map(|column| top.get(column).map(|&(z, _)| z))
            .max()
            .unwrap_or(0);
        let mut below: Vec<usize> = columns
            .iter()
            .filter_map(|column| top.get(column))
            .filter(|&&(z, _)| z == floor)
            .map(|&(_, j)| j)
            .collect();
        below.sort_unstable();
        below.dedup();
        for &j in &below {
            supports[j].push(i);
        }
        supported_by[i] = below;
        let height = brick.high[2] - brick.low[2];
        for column in columns {
            top.insert(column, (floor + 1 + height, i));
        }
    }
    Ok(Stack { supported_by, supports })
}

impl Stack {
    /// Bricks that fall when `removed` is disintegrated.
    fn chain_reaction(&self, removed: usize) -> usize {
        let mut fallen = vec![false; self.supports.len()];
        fallen[removed] = true;
        let mut queue = vec![removed];
        let mut count = 0;
        while let Some(i) = queue.pop() {
            for &j in &self.supports[i] {
                if !fallen[j] && self.supported_by[j].iter().all(|&k| fallen[k]) {
                    fallen[j] = true;
                    count += 1;
                    queue.push(j);
                }
            }
        }
        count
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let stack = settle(input)?;
    let safe = (0..stack.supports.len())
        .filter(|&i| stack.supports[i].iter().all(|&j| stack.supported_by[j].len() > 1))
        .count();
    Ok(safe.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let stack = settle(input)?;
    let total: usize = (0..stack.supports.len()).map(|i| stack.chain_reaction(i)).sum();
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1,0,1~1,2,1
        0,0,2~2,0,2
        0,2,3~2,2,3
        0,0,4~0,2,4
        2,0,5~2,2,5
        0,1,6~2,1,6
        1,1,8~1,1,9
    "};

    #[test]
    fn test_day22() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(5));
        assert_eq!(part_b(&input)?, Answer::from(7));
        Ok(())
    }
}
