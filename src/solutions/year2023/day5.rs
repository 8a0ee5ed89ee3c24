use anyhow::{bail, Context, Result};

use crate::{numbers_in, range::Interval, Answer, PuzzleInput};

struct Mapping {
    source: Interval,
    shift: i64,
}

struct Almanac {
    seeds: Vec<i64>,
    /// Maps in order from seed to location.
    maps: Vec<Vec<Mapping>>,
}

fn parse(input: &PuzzleInput) -> Result<Almanac> {
    let groups = input.groups();
    let Some((seeds, maps)) = groups.split_first() else {
        bail!("empty almanac");
    };
    let seeds = numbers_in(seeds.first().context("missing seeds")?)?;
    let maps = maps
        .iter()
        .map(|block| {
            block[1..]
                .iter()
                .map(|line| match numbers_in(line)?.as_slice() {
                    &[destination, source, length] => Ok(Mapping {
                        source: Interval::new(source, source + length),
                        shift: destination - source,
                    }),
                    _ => bail!("invalid mapping {line:?}"),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;
    Ok(Almanac { seeds, maps })
}

/// Pushes intervals through one map; parts not covered by any mapping keep their numbers.
fn apply(map: &[Mapping], intervals: Vec<Interval>) -> Vec<Interval> {
    let mut mapped = Vec::new();
    let mut pending = intervals;
    for mapping in map {
        let mut unmapped = Vec::new();
        for interval in pending {
            let Some(overlap) = interval.intersection(&mapping.source) else {
                unmapped.push(interval);
                continue;
            };
            mapped.push(overlap.shifted(mapping.shift));
            unmapped.extend(interval.split_at(mapping.source.start).0);
            unmapped.extend(interval.split_at(mapping.source.stop).1);
        }
        pending = unmapped;
    }
    mapped.extend(pending);
    mapped
}

fn lowest_location(almanac: &Almanac, seeds: Vec<Interval>) -> Result<Answer> {
    let locations = almanac
        .maps
        .iter()
        .fold(seeds, |intervals, map| apply(map, intervals));
    let lowest = locations
        .iter()
        .map(|interval| interval.start)
        .min()
        .context("no seeds")?;
    Ok(lowest.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let almanac = parse(input)?;
    let seeds = almanac.seeds.iter().map(|&seed| Interval::new(seed, seed + 1)).collect();
    lowest_location(&almanac, seeds)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let almanac = parse(input)?;
    let seeds = almanac
        .seeds
        .chunks(2)
        .map(|pair| match pair {
            &[start, length] => Ok(Interval::new(start, start + length)),
            _ => bail!("seed ranges come in pairs"),
        })
        .collect::<Result<_>>()?;
    lowest_location(&almanac, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-fertilizer map:
        0 15 37
        37 52 2
        39 0 15

        fertilizer-to-water map:
        49 53 8
        0 11 42
        42 0 7
        57 7 4

        water-to-light map:
        88 18 7
        18 25 70

        light-to-temperature map:
        45 77 23
        81 45 19
        68 64 13

        temperature-to-humidity map:
        0 69 1
        1 0 69

        humidity-to-location map:
        60 56 37
        56 93 4
    "};

    #[test]
    fn test_day5() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(35));
        assert_eq!(part_b(&input)?, Answer::from(46));
        Ok(())
    }
}
