use anyhow::{bail, Context, Result};

use crate::{
    grid::{shortest_path_analysis, Coords, Grid},
    numbers_in, tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Safe = '.',
        Corrupted = '#',
        Start = 'S',
    }
}

struct Memory {
    size: usize,
    bytes: Vec<Coords>,
}

fn parse(input: &PuzzleInput) -> Result<Memory> {
    let bytes = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?.as_slice() {
            &[x, y] => Ok(Coords::new(x as isize, y as isize)),
            _ => bail!("invalid byte position {line:?}"),
        })
        .collect::<Result<_>>()?;
    let size = if input.is_example() { 7 } else { 71 };
    Ok(Memory { size, bytes })
}

impl Memory {
    fn steps_to_exit(&self, fallen: usize) -> Result<Option<usize>> {
        let mut grid = Grid::from_size(self.size, self.size, Tile::Safe);
        for &c in &self.bytes[..fallen.min(self.bytes.len())] {
            grid.set(c, Tile::Corrupted)?;
        }
        grid.set(Coords::new(0, 0), Tile::Start)?;
        let exit = Coords::new(self.size as isize - 1, self.size as isize - 1);
        Ok(shortest_path_analysis(&grid, &Tile::Start, &Tile::Corrupted)
            .get(&exit)
            .copied())
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let memory = parse(input)?;
    let fallen = if input.is_example() { 12 } else { 1024 };
    let steps = memory.steps_to_exit(fallen)?.context("the exit is unreachable")?;
    Ok(steps.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let memory = parse(input)?;
    // Smallest number of fallen bytes that cuts off the exit.
    let (mut reachable, mut blocked) = (0, memory.bytes.len());
    if memory.steps_to_exit(blocked)?.is_some() {
        bail!("the exit stays reachable");
    }
    while blocked - reachable > 1 {
        let middle = (reachable + blocked) / 2;
        if memory.steps_to_exit(middle)?.is_some() {
            reachable = middle;
        } else {
            blocked = middle;
        }
    }
    Ok(memory.bytes[blocked - 1].to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        5,4
        4,2
        4,5
        3,0
        2,1
        6,3
        2,4
        1,5
        0,6
        3,3
        2,6
        5,1
        1,2
        5,5
        2,5
        6,5
        1,4
        0,4
        6,4
        1,1
        6,1
        1,0
        0,5
        1,6
        2,0
    "};

    #[test]
    fn test_day18() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(22));
        assert_eq!(part_b(&input)?, Answer::from("6,1"));
        Ok(())
    }
}
