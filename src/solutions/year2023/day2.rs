use anyhow::{bail, Context, Result};

use crate::{Answer, PuzzleInput};

#[derive(Debug, Default, Clone, Copy)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

struct Game {
    id: u32,
    /// Fewest cubes of each colour that make every draw possible.
    minimum: Cubes,
}

fn parse_game(line: &str) -> Result<Game> {
    let (header, draws) = line
        .split_once(": ")
        .with_context(|| format!("invalid game {line:?}"))?;
    let id = header.trim_start_matches("Game ").parse()?;
    let mut minimum = Cubes::default();
    for cubes in draws.split(&[';', ','][..]) {
        let (count, colour) = cubes
            .trim()
            .split_once(' ')
            .with_context(|| format!("invalid cube count {cubes:?}"))?;
        let count: u32 = count.parse()?;
        let slot = match colour {
            "red" => &mut minimum.red,
            "green" => &mut minimum.green,
            "blue" => &mut minimum.blue,
            _ => bail!("unknown colour {colour:?}"),
        };
        *slot = (*slot).max(count);
    }
    Ok(Game { id, minimum })
}

fn games(input: &PuzzleInput) -> Result<Vec<Game>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_game)
        .collect()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let sum: u32 = games(input)?
        .iter()
        .filter(|game| {
            game.minimum.red <= 12 && game.minimum.green <= 13 && game.minimum.blue <= 14
        })
        .map(|game| game.id)
        .sum();
    Ok(sum.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let power: u32 = games(input)?
        .iter()
        .map(|game| game.minimum.red * game.minimum.green * game.minimum.blue)
        .sum();
    Ok(power.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
        Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
        Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
        Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
        Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
    "};

    #[test]
    fn test_day2() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(8));
        assert_eq!(part_b(&input)?, Answer::from(2286));
        Ok(())
    }
}
