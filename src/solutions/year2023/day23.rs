use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::{
    direction::Direction,
    graph::WeightedGraph,
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Path = '.',
        Forest = '#',
        SlopeNorth = '^',
        SlopeEast = '>',
        SlopeSouth = 'v',
        SlopeWest = '<',
    }
}

impl Tile {
    fn enterable(self, direction: Direction, slippery: bool) -> bool {
        let slope = match self {
            Tile::Path => return true,
            Tile::Forest => return false,
            Tile::SlopeNorth => Direction::North,
            Tile::SlopeEast => Direction::East,
            Tile::SlopeSouth => Direction::South,
            Tile::SlopeWest => Direction::West,
        };
        !slippery || slope == direction
    }
}

fn open(grid: &Grid<Tile>, c: Coords) -> bool {
    grid.get(c).is_some_and(|&tile| tile != Tile::Forest)
}

/// Compresses the trails into a graph between junctions (plus start and end), with the
/// corridor lengths as weights.
fn junction_graph(grid: &Grid<Tile>, slippery: bool) -> Result<(WeightedGraph, Coords, Coords)> {
    let on_row = |y: usize| {
        let row = grid.row(y);
        row.iter()
            .position(|&tile| tile == Tile::Path)
            .map(|x| Coords::new(x as isize, y as isize))
    };
    let start = on_row(0).context("no start on the top row")?;
    let end = on_row(grid.height() - 1).context("no end on the bottom row")?;

    let mut junctions: Vec<Coords> = grid
        .coords()
        .filter(|&c| open(grid, c) && c.neighbours().filter(|&n| open(grid, n)).count() > 2)
        .collect();
    junctions.extend([start, end]);

    let mut graph = WeightedGraph::new();
    for &junction in &junctions {
        graph.add_vertex(junction.to_string(), junction);
    }
    for &junction in &junctions {
        let from = graph.add_vertex(junction.to_string(), junction);
        for direction in Direction::ALL {
            let mut position = junction.step(direction);
            let mut heading = direction;
            let mut steps = 1;
            if !grid.get(position).is_some_and(|tile| tile.enterable(heading, slippery)) {
                continue;
            }
            let reached = loop {
                if let Some(to) = graph.vertex_index(&position.to_string()) {
                    break Some(to);
                }
                let next = heading.opposite().all_but().find(|&d| {
                    grid.get(position.step(d))
                        .is_some_and(|tile| tile.enterable(d, slippery))
                });
                let Some(next) = next else {
                    break None;
                };
                heading = next;
                position = position.step(heading);
                steps += 1;
            };
            if let Some(to) = reached {
                graph.add_unidirectional_edge(from, to, steps);
            }
        }
    }
    Ok((graph, start, end))
}

fn longest_hike(input: &PuzzleInput, slippery: bool) -> Result<Answer> {
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let (graph, start, end) = junction_graph(&grid, slippery)?;
    debug!(vertices = graph.len(), edges = graph.edge_count(), "compressed trail map");
    trace!("\n{}", graph.describe());
    let start = graph.vertex_index(&start.to_string()).context("start is not a vertex")?;
    let end = graph.vertex_index(&end.to_string()).context("end is not a vertex")?;
    let longest = graph
        .longest_simple_path(start, end)?
        .context("no hike reaches the end")?;
    Ok(longest.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    longest_hike(input, true)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    longest_hike(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.#####################
        #.......#########...###
        #######.#########.#.###
        ###.....#.>.>.###.#.###
        ###v#####.#v#.###.#.###
        ###.>...#.#.#.....#...#
        ###v###.#.#.#########.#
        ###...#.#.#.......#...#
        #####.#.#.#######.#.###
        #.....#.#.#.......#...#
        #.#####.#.#.#########v#
        #.#...#...#...###...>.#
        #.#.#v#######v###.###v#
        #...#.>.#...>.>.#.###.#
        #####v#.#.###v#.#.###.#
        #.....#...#...#.#.#...#
        #.#########.###.#.#.###
        #...###...#...#...#.###
        ###.###.#.###v#####v###
        #...#...#.#.>.>.#.>.###
        #.###.###.#.###.#.#v###
        #.....###...###...#...#
        #####################.#
    "};

    #[test]
    fn test_day23() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(94));
        assert_eq!(part_b(&input)?, Answer::from(154));
        Ok(())
    }
}
