use std::{cmp::Reverse, collections::BinaryHeap};

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    direction::Direction,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Empty = '.',
        Wall = '#',
        Start = 'S',
        End = 'E',
    }
}

type State = (Coords, Direction);

fn lowest_scores(grid: &Grid<Tile>, starts: &[State]) -> FxHashMap<State, usize> {
    let mut scores: FxHashMap<State, usize> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    for &start in starts {
        scores.insert(start, 0);
        heap.push(Reverse((0, start)));
    }
    while let Some(Reverse((score, (c, direction)))) = heap.pop() {
        if scores.get(&(c, direction)).is_some_and(|&best| best < score) {
            continue;
        }
        let forward = c.step(direction);
        let moves = [
            (forward, direction, score + 1),
            (c, direction.cw(), score + 1000),
            (c, direction.ccw(), score + 1000),
        ];
        for (next, next_direction, next_score) in moves {
            if grid.value_at_or(next, Tile::Wall) == Tile::Wall {
                continue;
            }
            let best = scores.entry((next, next_direction)).or_insert(usize::MAX);
            if next_score < *best {
                *best = next_score;
                heap.push(Reverse((next_score, (next, next_direction))));
            }
        }
    }
    scores
}

struct Maze {
    from_start: FxHashMap<State, usize>,
    best: usize,
    end: Coords,
    grid: Grid<Tile>,
}

fn solve(input: &PuzzleInput) -> Result<Maze> {
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let start = grid.find(&Tile::Start).context("maze has no start")?;
    let end = grid.find(&Tile::End).context("maze has no end")?;
    let from_start = lowest_scores(&grid, &[(start, Direction::East)]);
    let best = Direction::ALL
        .into_iter()
        .filter_map(|d| from_start.get(&(end, d)).copied())
        .min()
        .context("the end is unreachable")?;
    Ok(Maze {
        from_start,
        best,
        end,
        grid,
    })
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    Ok(solve(input)?.best.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let maze = solve(input)?;
    // Searching from the end in every facing gives the remaining score of the reversed state.
    let starts: Vec<State> = Direction::ALL.into_iter().map(|d| (maze.end, d)).collect();
    let to_end = lowest_scores(&maze.grid, &starts);
    let tiles: FxHashSet<Coords> = maze
        .from_start
        .iter()
        .filter(|&(&(c, direction), &score)| {
            to_end
                .get(&(c, direction.opposite()))
                .is_some_and(|&rest| score + rest == maze.best)
        })
        .map(|(&(c, _), _)| c)
        .collect();
    Ok(tiles.len().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ###############
        #.......#....E#
        #.#.###.#.###.#
        #.....#.#...#.#
        #.###.#####.#.#
        #.#.#.......#.#
        #.#.#####.###.#
        #...........#.#
        ###.#.#####.#.#
        #...#.....#.#.#
        #.#.#.###.#.#.#
        #.....#...#.#.#
        #.###.#.#.#.#.#
        #S..#.....#...#
        ###############
    "};

    #[test]
    fn test_day16() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(7036));
        assert_eq!(part_b(&input)?, Answer::from(45));
        Ok(())
    }
}
