use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::{grid::Coords, Answer, PuzzleInput};

const NUMERIC: [&str; 4] = ["789", "456", "123", " 0A"];
const DIRECTIONAL: [&str; 2] = [" ^A", "<v>"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Keypad {
    Numeric,
    Directional,
}

impl Keypad {
    fn layout(self) -> &'static [&'static str] {
        match self {
            Keypad::Numeric => &NUMERIC,
            Keypad::Directional => &DIRECTIONAL,
        }
    }

    fn position(self, key: char) -> Result<Coords> {
        self.layout()
            .iter()
            .enumerate()
            .find_map(|(y, row)| row.find(key).map(|x| Coords::new(x as isize, y as isize)))
            .with_context(|| format!("no key {key:?} on the {self:?} keypad"))
    }

    /// Move sequences (ending in `A`) that never hover over the gap.
    fn paths(self, from: char, to: char) -> Result<Vec<String>> {
        let (from, to, gap) = (self.position(from)?, self.position(to)?, self.position(' ')?);
        let horizontal = (if to.x < from.x { "<" } else { ">" }).repeat(from.x.abs_diff(to.x));
        let vertical = (if to.y < from.y { "^" } else { "v" }).repeat(from.y.abs_diff(to.y));
        let mut paths = Vec::with_capacity(2);
        if Coords::new(to.x, from.y) != gap {
            paths.push(format!("{horizontal}{vertical}A"));
        }
        if Coords::new(from.x, to.y) != gap {
            paths.push(format!("{vertical}{horizontal}A"));
        }
        paths.dedup();
        Ok(paths)
    }
}

#[derive(Default)]
struct Chain {
    cache: FxHashMap<(Keypad, char, char, usize), u64>,
}

impl Chain {
    /// Human key presses needed to type `sequence` on `keypad` with `depth` directional
    /// keypads stacked above it.
    fn presses(&mut self, keypad: Keypad, sequence: &str, depth: usize) -> Result<u64> {
        let mut total = 0;
        let mut from = 'A';
        for to in sequence.chars() {
            total += self.move_and_press(keypad, from, to, depth)?;
            from = to;
        }
        Ok(total)
    }

    fn move_and_press(
        &mut self,
        keypad: Keypad,
        from: char,
        to: char,
        depth: usize,
    ) -> Result<u64> {
        if depth == 0 {
            return Ok(1);
        }
        if let Some(&cost) = self.cache.get(&(keypad, from, to, depth)) {
            return Ok(cost);
        }
        let mut best = u64::MAX;
        for path in keypad.paths(from, to)? {
            best = best.min(self.presses(Keypad::Directional, &path, depth - 1)?);
        }
        self.cache.insert((keypad, from, to, depth), best);
        Ok(best)
    }
}

fn complexities(input: &PuzzleInput, robots: usize) -> Result<Answer> {
    let mut chain = Chain::default();
    let mut total = 0;
    for code in input.lines().filter(|line| !line.is_empty()) {
        let Some(digits) = code.strip_suffix('A') else {
            bail!("door code {code:?} does not end in A");
        };
        let length = chain.presses(Keypad::Numeric, code, robots + 1)?;
        total += length * digits.parse::<u64>()?;
    }
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    complexities(input, 2)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    complexities(input, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        029A
        980A
        179A
        456A
        379A
    "};

    #[test]
    fn test_day21() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(126384));
        Ok(())
    }

    #[test]
    fn test_shortest_sequence() -> Result<()> {
        let mut chain = Chain::default();
        assert_eq!(chain.presses(Keypad::Numeric, "029A", 1)?, 12);
        assert_eq!(chain.presses(Keypad::Numeric, "029A", 3)?, 68);
        Ok(())
    }
}
