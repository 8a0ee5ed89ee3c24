use anyhow::{bail, Context, Result};

use crate::{direction::Direction, grid::Coords, Answer, PuzzleInput};

struct Instruction {
    direction: Direction,
    meters: isize,
}

fn parse_plain(line: &str) -> Result<Instruction> {
    let mut parts = line.split_whitespace();
    let (Some(direction), Some(meters)) = (parts.next(), parts.next()) else {
        bail!("invalid dig instruction {line:?}");
    };
    Ok(Instruction {
        direction: Direction::from_char(direction.chars().next().context("empty direction")?)?,
        meters: meters.parse()?,
    })
}

/// The real instruction hides in the colour: five hex digits of distance, then the direction.
fn parse_colour(line: &str) -> Result<Instruction> {
    let hex = line
        .split_whitespace()
        .nth(2)
        .and_then(|colour| colour.strip_prefix("(#"))
        .and_then(|colour| colour.strip_suffix(')'))
        .filter(|hex| hex.len() == 6)
        .with_context(|| format!("invalid colour in {line:?}"))?;
    let direction = match &hex[5..] {
        "0" => Direction::East,
        "1" => Direction::South,
        "2" => Direction::West,
        "3" => Direction::North,
        other => bail!("invalid direction digit {other:?}"),
    };
    Ok(Instruction {
        direction,
        meters: isize::from_str_radix(&hex[..5], 16)?,
    })
}

/// Shoelace area plus the half of the trench that lies outside of the polygon.
fn lagoon_size(input: &PuzzleInput, parse: fn(&str) -> Result<Instruction>) -> Result<Answer> {
    let mut position = Coords::new(0, 0);
    let mut doubled_area = 0;
    let mut perimeter = 0;
    for line in input.lines().filter(|line| !line.is_empty()) {
        let instruction = parse(line)?;
        let next = instruction.direction.next_coords_by(position, instruction.meters);
        doubled_area += position.x * next.y - next.x * position.y;
        perimeter += instruction.meters;
        position = next;
    }
    Ok(((doubled_area.abs() + perimeter) / 2 + 1).into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    lagoon_size(input, parse_plain)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    lagoon_size(input, parse_colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        R 6 (#70c710)
        D 5 (#0dc571)
        L 2 (#5713f0)
        D 2 (#d2c081)
        R 2 (#59c680)
        D 2 (#411b91)
        L 5 (#8ceee2)
        U 2 (#caa173)
        L 1 (#1b58a2)
        U 2 (#caa171)
        R 2 (#7807d2)
        U 3 (#a77fa3)
        L 2 (#015232)
        U 2 (#7a21e3)
    "};

    #[test]
    fn test_day18() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(62));
        assert_eq!(part_b(&input)?, Answer::from(952408144115_i64));
        Ok(())
    }
}
