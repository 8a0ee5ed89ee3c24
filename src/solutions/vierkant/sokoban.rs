//! Sliding chair puzzle: bring the goal chair to the centre of the room.

use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        Chair = 'o',
        Goal = 'O',
    }
}

#[derive(Debug, Clone, Copy)]
struct Move {
    from: Coords,
    direction: Direction,
}

fn on_edge(grid: &Grid<Tile>, c: Coords) -> bool {
    c.x == 0 || c.y == 0 || c.x as usize == grid.width() - 1 || c.y as usize == grid.height() - 1
}

fn centre(grid: &Grid<Tile>) -> Coords {
    Coords::new((grid.width() / 2) as isize, (grid.height() / 2) as isize)
}

/// Chairs on the edge are off the tables and never move.
fn possible_moves(grid: &Grid<Tile>) -> impl Iterator<Item = Move> + '_ {
    grid.all_coords_for(&[Tile::Chair, Tile::Goal])
        .filter(move |&c| !on_edge(grid, c))
        .cartesian_product(Direction::ALL)
        .filter(move |&(c, direction)| grid.get(c.step(direction)) == Some(&Tile::Empty))
        .map(|(from, direction)| Move { from, direction })
}

/// The chair slides until it hits another chair or reaches the edge of the room.
fn slide(grid: &Grid<Tile>, m: Move) -> Result<Grid<Tile>> {
    let mut next = grid.clone();
    let chair = grid[m.from];
    next.set(m.from, Tile::Empty)?;
    let mut at = m.from;
    while next.get(at.step(m.direction)) == Some(&Tile::Empty) {
        at = at.step(m.direction);
    }
    next.set(at, chair)?;
    Ok(next)
}

/// Breadth-first search over room layouts.
fn shortest_solution(input: &PuzzleInput) -> Result<Vec<Move>> {
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    if grid.tiles().filter(|&&tile| tile == Tile::Goal).count() != 1 {
        bail!("expected exactly one goal chair");
    }
    let target = centre(&grid);

    let mut states: Vec<(Grid<Tile>, Option<(usize, Move)>)> = vec![(grid.clone(), None)];
    let mut visited = FxHashSet::from_iter([grid]);
    let mut queue = VecDeque::from([0]);
    while let Some(index) = queue.pop_front() {
        let grid = &states[index].0;
        if grid[target] == Tile::Goal {
            debug!(states = states.len(), "found a solution");
            let mut moves = Vec::new();
            let mut current = index;
            while let Some((parent, m)) = states[current].1 {
                moves.push(m);
                current = parent;
            }
            moves.reverse();
            return Ok(moves);
        }
        let goal = grid.find(&Tile::Goal).context("goal chair went missing")?;
        if on_edge(grid, goal) {
            continue;
        }
        let successors = possible_moves(grid)
            .map(|m| Ok((slide(grid, m)?, m)))
            .collect::<Result<Vec<_>>>()?;
        for (next, m) in successors {
            if visited.insert(next.clone()) {
                queue.push_back(states.len());
                states.push((next, Some((index, m))));
            }
        }
    }
    bail!(
        "no sequence of moves brings the goal chair to the centre ({} layouts tried)",
        visited.len()
    )
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let moves = shortest_solution(input)?;
    Ok(moves
        .iter()
        .map(|m| format!("{}{}", m.from, m.direction.to_char()))
        .join(" ")
        .into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    Ok(shortest_solution(input)?.len().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        .....
        .O.o.
        .....
        ..o..
        .....
    "};

    #[test]
    fn test_sokoban() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from("1,1> 2,1v"));
        assert_eq!(part_b(&input)?, Answer::from(2));
        Ok(())
    }

    #[test]
    fn test_already_solved() -> Result<()> {
        let input = PuzzleInput::example("...\n.O.\n...\n");
        assert_eq!(part_b(&input)?, Answer::from(0));
        Ok(())
    }

    #[test]
    fn test_goal_on_edge() {
        let input = PuzzleInput::example("O..\n...\n..o\n");
        assert!(part_a(&input).is_err());
    }

    #[test]
    fn test_slide_stops_on_edge() -> Result<()> {
        let grid: Grid<Tile> = Grid::parse(["....", ".o..", "...."])?;
        let moved = slide(
            &grid,
            Move {
                from: Coords::new(1, 1),
                direction: Direction::East,
            },
        )?;
        assert_eq!(moved.to_string(), "....\n...o\n....\n");
        Ok(())
    }
}
