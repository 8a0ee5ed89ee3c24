use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        Wall = '#',
        Box = 'O',
        BoxLeft = '[',
        BoxRight = ']',
        Robot = '@',
    }
}

struct Warehouse {
    grid: Grid<Tile>,
    robot: Coords,
}

impl Warehouse {
    fn new(lines: &[String]) -> Result<Self> {
        let grid: Grid<Tile> = Grid::parse(lines.iter().map(String::as_str))?;
        let robot = grid.find(&Tile::Robot).context("no robot in the warehouse")?;
        Ok(Self { grid, robot })
    }

    /// Moves the robot unless something in the chain of pushed boxes hits a wall.
    fn push(&mut self, direction: Direction) {
        let mut to_move = vec![self.robot];
        let mut seen: FxHashSet<Coords> = FxHashSet::from_iter([self.robot]);
        let mut queue = VecDeque::from([self.robot]);
        while let Some(c) = queue.pop_front() {
            let next = c.step(direction);
            let pushed = match self.grid.value_at_or(next, Tile::Wall) {
                Tile::Wall => return,
                Tile::Empty | Tile::Robot => continue,
                Tile::Box => vec![next],
                Tile::BoxLeft => vec![next, next.step(Direction::East)],
                Tile::BoxRight => vec![next, next.step(Direction::West)],
            };
            for c in pushed {
                if seen.insert(c) {
                    to_move.push(c);
                    queue.push_back(c);
                }
            }
        }
        for &c in to_move.iter().rev() {
            self.grid[c.step(direction)] = self.grid[c];
            self.grid[c] = Tile::Empty;
        }
        self.robot = self.robot.step(direction);
    }

    fn gps_sum(&self) -> isize {
        self.grid
            .all_coords_for(&[Tile::Box, Tile::BoxLeft])
            .map(|c| 100 * c.y + c.x)
            .sum()
    }
}

fn simulate(input: &PuzzleInput, widen: bool) -> Result<Answer> {
    let groups = input.groups();
    let [map, moves] = groups.as_slice() else {
        bail!("expected a warehouse map and a list of moves");
    };
    let lines: Vec<String> = map
        .iter()
        .map(|line| {
            if !widen {
                return line.to_string();
            }
            line.chars()
                .map(|c| match c {
                    'O' => "[]",
                    '@' => "@.",
                    '#' => "##",
                    _ => "..",
                })
                .collect()
        })
        .collect();
    let mut warehouse = Warehouse::new(&lines)?;
    for c in moves.iter().flat_map(|line| line.chars()) {
        warehouse.push(Direction::from_char(c)?);
    }
    Ok(warehouse.gps_sum().into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    simulate(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    simulate(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day15() -> Result<()> {
        let input = PuzzleInput::example(indoc! {"
            ########
            #..O.O.#
            ##@.O..#
            #...O..#
            #.#.O..#
            #...O..#
            #......#
            ########

            <^^>>>vv<v>>v<<
        "});
        assert_eq!(part_a(&input)?, Answer::from(2028));

        let input = PuzzleInput::example(indoc! {"
            #######
            #...#.#
            #.....#
            #..OO@#
            #..O..#
            #.....#
            #######

            <vv<<^^<<^^
        "});
        assert_eq!(part_b(&input)?, Answer::from(618));
        Ok(())
    }
}
