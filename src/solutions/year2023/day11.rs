use anyhow::Result;

use crate::{grid::Grid, Answer, PuzzleInput};

/// Sum of pairwise distances along one axis, where empty lines count `expansion` times.
fn axis_distances(mut positions: Vec<usize>, occupied: &[bool], expansion: usize) -> usize {
    let mut expanded = Vec::with_capacity(occupied.len());
    let mut offset = 0;
    for &is_occupied in occupied {
        expanded.push(offset);
        offset += if is_occupied { 1 } else { expansion };
    }
    positions.sort_unstable();
    let mut total = 0;
    let mut prefix = 0;
    for (i, &p) in positions.iter().enumerate() {
        let position = expanded[p];
        total += position * i - prefix;
        prefix += position;
    }
    total
}

fn galaxy_distances(input: &PuzzleInput, expansion: usize) -> Result<Answer> {
    let grid = Grid::from_bytes(input.lines().filter(|line| !line.is_empty()))?;
    let galaxies: Vec<_> = grid.all_coords_for(&[b'#']).collect();
    let mut columns = vec![false; grid.width()];
    let mut rows = vec![false; grid.height()];
    for galaxy in &galaxies {
        columns[galaxy.x as usize] = true;
        rows[galaxy.y as usize] = true;
    }
    let xs = galaxies.iter().map(|g| g.x as usize).collect();
    let ys = galaxies.iter().map(|g| g.y as usize).collect();
    let total = axis_distances(xs, &columns, expansion) + axis_distances(ys, &rows, expansion);
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    galaxy_distances(input, 2)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    galaxy_distances(input, if input.is_example() { 100 } else { 1_000_000 })
}
