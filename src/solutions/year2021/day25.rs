use anyhow::Result;

use crate::{
    grid::{Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Floor {
        Empty = '.',
        East = '>',
        South = 'v',
    }
}

/// Moves one herd simultaneously, wrapping around the edges.
fn move_herd(floor: &Grid<Floor>, herd: Floor, delta: Coords) -> Result<(Grid<Floor>, bool)> {
    let (width, height) = (floor.width() as isize, floor.height() as isize);
    let mut next = floor.clone();
    let mut moved = false;
    for c in floor.all_coords_for(&[herd]) {
        let target = c + delta;
        let target = Coords::new(target.x.rem_euclid(width), target.y.rem_euclid(height));
        if floor[target] == Floor::Empty {
            next.set(c, Floor::Empty)?;
            next.set(target, herd)?;
            moved = true;
        }
    }
    Ok((next, moved))
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let mut floor: Grid<Floor> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    let mut steps = 1usize;
    loop {
        let (east, moved_east) = move_herd(&floor, Floor::East, Coords::new(1, 0))?;
        let (south, moved_south) = move_herd(&east, Floor::South, Coords::new(0, 1))?;
        if !moved_east && !moved_south {
            return Ok(steps.into());
        }
        floor = south;
        steps += 1;
    }
}

pub fn part_b(_input: &PuzzleInput) -> Result<Answer> {
    Ok("no part two".into())
}
