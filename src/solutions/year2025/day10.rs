use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::{Answer, PuzzleInput};

struct Machine {
    lights: u32,
    buttons: Vec<Vec<usize>>,
    joltages: Vec<i128>,
}

fn strip<'a>(token: &'a str, open: char, close: char) -> Result<&'a str> {
    token
        .strip_prefix(open)
        .and_then(|inner| inner.strip_suffix(close))
        .with_context(|| format!("expected {token:?} to be enclosed in {open}{close}"))
}

fn parse_list<T: std::str::FromStr>(token: &str, open: char, close: char) -> Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    strip(token, open, close)?
        .split(',')
        .map(|n| n.parse::<T>().with_context(|| format!("invalid number {n:?} in {token:?}")))
        .collect()
}

fn parse(input: &PuzzleInput) -> Result<Vec<Machine>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [lights, buttons @ .., joltages] = tokens.as_slice() else {
                bail!("invalid machine {line:?}");
            };
            let lights = strip(lights, '[', ']')?;
            let light_count = lights.len();
            if light_count > 32 || buttons.len() >= 32 {
                bail!("machine {line:?} has too many lights or buttons");
            }
            let lights = lights.bytes().enumerate().try_fold(0u32, |mask, (i, b)| match b {
                b'#' => Ok(mask | 1 << i),
                b'.' => Ok(mask),
                _ => bail!("invalid light {:?} in {line:?}", b as char),
            })?;
            let buttons: Vec<Vec<usize>> = buttons
                .iter()
                .map(|button| parse_list(button, '(', ')'))
                .collect::<Result<_>>()?;
            let joltages: Vec<i128> = parse_list(joltages, '{', '}')?;
            if buttons.iter().flatten().any(|&i| i >= joltages.len()) {
                bail!("machine {line:?} has a button wired to a missing counter");
            }
            if joltages.len() != light_count {
                bail!("machine {line:?} has a different number of lights and joltages");
            }
            Ok(Machine {
                lights,
                buttons,
                joltages,
            })
        })
        .collect()
}

impl Machine {
    /// Each button needs to be pressed at most once since two presses cancel out.
    fn fewest_presses_for_lights(&self) -> Option<u32> {
        let masks: Vec<u32> = self
            .buttons
            .iter()
            .map(|button| button.iter().fold(0, |mask, &i| mask | 1 << i))
            .collect();
        (0u32..1 << masks.len())
            .filter(|subset| {
                let lights = masks
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| subset & 1 << i != 0)
                    .fold(0, |lights, (_, mask)| lights ^ mask);
                lights == self.lights
            })
            .map(u32::count_ones)
            .min()
    }

    fn fewest_presses_for_joltages(&self) -> Result<i128> {
        let system = System::new(self)?;
        let mut best = None;
        let mut assignment = vec![0; system.free.len()];
        system.search(0, &mut assignment, &mut best);
        best.context("no combination of button presses reaches the joltages")
    }
}

/// The joltage equations in reduced row echelon form, kept in integers.
struct System {
    rows: Vec<Vec<i128>>,
    pivots: Vec<usize>,
    free: Vec<usize>,
    bounds: Vec<i128>,
}

impl System {
    fn new(machine: &Machine) -> Result<Self> {
        let width = machine.buttons.len();
        let mut rows: Vec<Vec<i128>> = machine
            .joltages
            .iter()
            .enumerate()
            .map(|(counter, &joltage)| {
                let mut row: Vec<i128> = machine
                    .buttons
                    .iter()
                    .map(|button| i128::from(button.contains(&counter)))
                    .collect();
                row.push(joltage);
                row
            })
            .collect();
        let bounds: Vec<i128> = machine
            .buttons
            .iter()
            .map(|button| {
                button
                    .iter()
                    .filter_map(|&counter| machine.joltages.get(counter).copied())
                    .min()
                    .unwrap_or(0)
            })
            .collect();

        let mut pivots = Vec::new();
        let mut free = Vec::new();
        for column in 0..width {
            let rank = pivots.len();
            let Some(pivot) = (rank..rows.len()).find(|&r| rows[r][column] != 0) else {
                free.push(column);
                continue;
            };
            rows.swap(rank, pivot);
            for r in 0..rows.len() {
                let factor = rows[r][column];
                if r == rank || factor == 0 {
                    continue;
                }
                let scale = rows[rank][column];
                let pivot_row = rows[rank].clone();
                for (value, p) in rows[r].iter_mut().zip(pivot_row) {
                    *value = *value * scale - p * factor;
                }
                normalize(&mut rows[r]);
            }
            pivots.push(column);
        }
        if rows[pivots.len()..].iter().any(|row| row[width] != 0) {
            bail!("the joltage equations are inconsistent");
        }
        rows.truncate(pivots.len());
        debug!(
            buttons = width,
            free = free.len(),
            "reduced joltage equations"
        );
        Ok(Self {
            rows,
            pivots,
            free,
            bounds,
        })
    }

    /// Tries every assignment of the free presses and solves for the rest.
    fn search(&self, index: usize, assignment: &mut [i128], best: &mut Option<i128>) {
        let spent: i128 = assignment[..index].iter().sum();
        if best.is_some_and(|best| spent >= best) {
            return;
        }
        if index == self.free.len() {
            if let Some(total) = self.solve(assignment) {
                *best = Some(best.map_or(total, |best| best.min(total)));
            }
            return;
        }
        for presses in 0..=self.bounds[self.free[index]] {
            assignment[index] = presses;
            self.search(index + 1, assignment, best);
        }
        assignment[index] = 0;
    }

    fn solve(&self, assignment: &[i128]) -> Option<i128> {
        let width = self.bounds.len();
        let mut total: i128 = assignment.iter().sum();
        for (row, &column) in self.rows.iter().zip(&self.pivots) {
            let rest: i128 = self
                .free
                .iter()
                .zip(assignment)
                .map(|(&f, &presses)| row[f] * presses)
                .sum();
            let remainder = row[width] - rest;
            if remainder % row[column] != 0 {
                return None;
            }
            let presses = remainder / row[column];
            if presses < 0 || presses > self.bounds[column] {
                return None;
            }
            total += presses;
        }
        Some(total)
    }
}

fn normalize(row: &mut [i128]) {
    let divisor = row.iter().fold(0, |acc, &v| num::integer::gcd(acc, v));
    if divisor > 1 {
        row.iter_mut().for_each(|v| *v /= divisor);
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let total = parse(input)?
        .iter()
        .map(|machine| {
            machine
                .fewest_presses_for_lights()
                .context("the lights can't be configured")
        })
        .sum::<Result<u32>>()?;
    Ok(total.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let total = parse(input)?
        .par_iter()
        .map(Machine::fewest_presses_for_joltages)
        .sum::<Result<i128>>()?;
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
        [...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
        [.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
    "};

    #[test]
    fn test_day10() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(7));
        assert_eq!(part_b(&input)?, Answer::from(33));
        Ok(())
    }

    #[test]
    fn test_single_machine() -> Result<()> {
        let machines = parse(&PuzzleInput::example(EXAMPLE))?;
        assert_eq!(machines[0].fewest_presses_for_lights(), Some(2));
        assert_eq!(machines[2].fewest_presses_for_joltages()?, 11);
        Ok(())
    }

    #[test]
    fn test_malformed_machines() {
        for line in [
            "[ (0) {1}",
            "[.#] ( {1,2}",
            "[.#] (0) {1,2",
            "[.x] (0) {1,2}",
            "[.#] (2) {1,2}",
            "[.#] (0,1) {1,2,3}",
            "[.#] (0,a) {1,2}",
        ] {
            assert!(parse(&PuzzleInput::example(line)).is_err(), "{line}");
        }
        let wide = format!("[{}] (0) {{1}}", ".".repeat(33));
        assert!(parse(&PuzzleInput::example(wide)).is_err());
    }
}
