use anyhow::{bail, Context, Result};

use crate::{
    range::{merge, Interval},
    Answer, PuzzleInput,
};

struct Database {
    fresh: Vec<Interval>,
    available: Vec<i64>,
}

fn parse(input: &PuzzleInput) -> Result<Database> {
    let groups = input.groups();
    let [fresh, available] = groups.as_slice() else {
        bail!("expected fresh ranges and available ingredients");
    };
    let fresh = fresh
        .iter()
        .map(|line| {
            let (start, end) = line
                .split_once('-')
                .with_context(|| format!("invalid range {line:?}"))?;
            Ok(Interval::inclusive(start.parse()?, end.parse()?))
        })
        .collect::<Result<Vec<_>>>()?;
    let available = available
        .iter()
        .map(|line| line.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Database {
        fresh: merge(fresh),
        available,
    })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let database = parse(input)?;
    let fresh = database
        .available
        .iter()
        .filter(|&&id| database.fresh.iter().any(|range| range.contains(id)))
        .count();
    Ok(fresh.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let database = parse(input)?;
    Ok(database.fresh.iter().map(Interval::size).sum::<i64>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        3-5
        10-14
        16-20
        12-18

        1
        5
        8
        11
        17
        32
    "};

    #[test]
    fn test_day5() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(3));
        assert_eq!(part_b(&input)?, Answer::from(14));
        Ok(())
    }
}
