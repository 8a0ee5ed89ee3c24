use std::collections::VecDeque;

use anyhow::{bail, Result};
use itertools::Itertools;

use crate::{
    grid::{Coords, Grid},
    numbers_in, Answer, PuzzleInput,
};

fn red_tiles(input: &PuzzleInput) -> Result<Vec<Coords>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?[..] {
            [x, y] => Ok(Coords::new(x as isize, y as isize)),
            _ => bail!("invalid red tile {line:?}"),
        })
        .collect()
}

fn area(a: Coords, b: Coords) -> i64 {
    ((a.x - b.x).abs() as i64 + 1) * ((a.y - b.y).abs() as i64 + 1)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let tiles = red_tiles(input)?;
    let largest = tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or(0);
    Ok(largest.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Unknown,
    Loop,
    Outside,
}

/// Maps distinct coordinates onto grid indices. Coordinates that are not adjacent get a gap cell
/// between them standing for every tile they skip.
struct Compression {
    values: Vec<isize>,
    indices: Vec<isize>,
}

impl Compression {
    fn new(values: impl Iterator<Item = isize>) -> Self {
        let values: Vec<isize> = values.sorted_unstable().dedup().collect();
        let mut indices = Vec::with_capacity(values.len());
        let mut next = 1;
        for (i, &value) in values.iter().enumerate() {
            if i > 0 && value - values[i - 1] > 1 {
                next += 1;
            }
            indices.push(next);
            next += 1;
        }
        Self { values, indices }
    }

    fn index(&self, value: isize) -> isize {
        self.indices[self.values.partition_point(|&v| v < value)]
    }

    /// One border cell on either side of the compressed coordinates.
    fn cells(&self) -> usize {
        self.indices.last().map_or(1, |&last| last as usize + 2)
    }
}

/// Only rectangles made entirely of red or green tiles count, i.e. those inside the loop.
pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let tiles = red_tiles(input)?;
    let xs = Compression::new(tiles.iter().map(|c| c.x));
    let ys = Compression::new(tiles.iter().map(|c| c.y));
    let compress = |c: Coords| Coords::new(xs.index(c.x), ys.index(c.y));

    let mut grid = Grid::from_size(xs.cells(), ys.cells(), Cell::Unknown);
    for (&a, &b) in tiles.iter().circular_tuple_windows() {
        let (from, to) = (compress(a), compress(b));
        if from.x != to.x && from.y != to.y {
            bail!("red tiles {a} and {b} are not on the same row or column");
        }
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                grid.set(Coords::new(x, y), Cell::Loop)?;
            }
        }
    }

    let mut queue = VecDeque::from([Coords::new(0, 0)]);
    grid.set(Coords::new(0, 0), Cell::Outside)?;
    while let Some(c) = queue.pop_front() {
        for next in c.neighbours() {
            if grid.get(next) == Some(&Cell::Unknown) {
                grid.set(next, Cell::Outside)?;
                queue.push_back(next);
            }
        }
    }

    // outside[y][x] counts outside cells in the rectangle from the origin up to (x - 1, y - 1).
    let stride = grid.width() + 1;
    let mut outside = vec![0usize; stride * (grid.height() + 1)];
    for (c, &cell) in grid.iter() {
        let (x, y) = (c.x as usize + 1, c.y as usize + 1);
        outside[y * stride + x] = usize::from(cell == Cell::Outside)
            + outside[(y - 1) * stride + x]
            + outside[y * stride + x - 1]
            - outside[(y - 1) * stride + x - 1];
    }
    let outside_within = |a: Coords, b: Coords| {
        let (x0, x1) = (a.x.min(b.x) as usize, a.x.max(b.x) as usize + 1);
        let (y0, y1) = (a.y.min(b.y) as usize, a.y.max(b.y) as usize + 1);
        outside[y1 * stride + x1] + outside[y0 * stride + x0]
            - outside[y0 * stride + x1]
            - outside[y1 * stride + x0]
    };

    let largest = tiles
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| outside_within(compress(a), compress(b)) == 0)
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or(0);
    Ok(largest.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        7,1
        11,1
        11,7
        9,7
        9,5
        2,5
        2,3
        7,3
    "};

    #[test]
    fn test_day9() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(50));
        assert_eq!(part_b(&input)?, Answer::from(24));
        Ok(())
    }

    #[test]
    fn test_adjacent_columns() -> Result<()> {
        // The loop doubles back on itself between columns 5 and 6, leaving no tile outside.
        let input = PuzzleInput::real("0,0\n5,0\n5,10\n6,10\n6,0\n10,0\n10,20\n0,20\n");
        assert_eq!(part_b(&input)?, Answer::from(231));

        let input = PuzzleInput::real("0,0\n5,0\n5,10\n7,10\n7,0\n10,0\n10,20\n0,20\n");
        assert_eq!(part_b(&input)?, Answer::from(126));
        Ok(())
    }
}
