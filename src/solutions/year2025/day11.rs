use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::{Answer, PuzzleInput};

struct Reactor<'a> {
    outputs: FxHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Reactor<'a> {
    fn parse(input: &'a PuzzleInput) -> Result<Self> {
        let outputs = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (device, outputs) = line
                    .split_once(": ")
                    .with_context(|| format!("invalid device {line:?}"))?;
                Ok((device, outputs.split_whitespace().collect()))
            })
            .collect::<Result<_>>()?;
        Ok(Self { outputs })
    }

    /// Number of distinct paths from `from` to `to`; the device graph is acyclic.
    fn paths(&self, from: &'a str, to: &str) -> u64 {
        fn count<'a>(
            reactor: &Reactor<'a>,
            device: &'a str,
            to: &str,
            memo: &mut FxHashMap<&'a str, u64>,
        ) -> u64 {
            if device == to {
                return 1;
            }
            if let Some(&paths) = memo.get(device) {
                return paths;
            }
            let paths = reactor
                .outputs
                .get(device)
                .map_or(0, |outputs| {
                    outputs
                        .iter()
                        .map(|next| count(reactor, next, to, memo))
                        .sum()
                });
            memo.insert(device, paths);
            paths
        }
        count(self, from, to, &mut FxHashMap::default())
    }

    fn require(&self, device: &str) -> Result<()> {
        self.outputs
            .contains_key(device)
            .then_some(())
            .with_context(|| format!("device {device} not found"))
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let reactor = Reactor::parse(input)?;
    reactor.require("you")?;
    Ok(reactor.paths("you", "out").into())
}

/// Paths from the server to the output that pass through both `dac` and `fft`, in either order.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let reactor = Reactor::parse(input)?;
    reactor.require("svr")?;
    let via = |first, second| {
        reactor.paths("svr", first) * reactor.paths(first, second) * reactor.paths(second, "out")
    };
    Ok((via("dac", "fft") + via("fft", "dac")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE_A: &str = indoc! {"
        aaa: you hhh
        you: bbb ccc
        bbb: ddd eee
        ccc: ddd eee fff
        ddd: ggg
        eee: out
        fff: out
        ggg: out
        hhh: ccc fff iii
        iii: out
    "};

    const EXAMPLE_B: &str = indoc! {"
        svr: aaa bbb
        aaa: fft
        fft: ccc
        bbb: tty
        tty: ccc
        ccc: ddd eee
        ddd: hub
        hub: fff
        eee: dac
        dac: fff
        fff: ggg hhh
        ggg: out
        hhh: out
    "};

    #[test]
    fn test_day11() -> Result<()> {
        assert_eq!(part_a(&PuzzleInput::example(EXAMPLE_A))?, Answer::from(5));
        assert_eq!(part_b(&PuzzleInput::example(EXAMPLE_B))?, Answer::from(2));
        Ok(())
    }

    #[test]
    fn test_missing_server() {
        assert!(part_b(&PuzzleInput::example(EXAMPLE_A)).is_err());
    }
}
