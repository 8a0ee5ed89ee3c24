use std::cmp::Ordering;

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

use crate::{grid::Coords, numbers_in, Answer, PuzzleInput};

struct Robot {
    position: Coords,
    velocity: Coords,
}

impl Robot {
    fn position_after(&self, seconds: isize, width: isize, height: isize) -> Coords {
        let moved = self.position + self.velocity * seconds;
        Coords::new(moved.x.rem_euclid(width), moved.y.rem_euclid(height))
    }
}

fn parse(input: &PuzzleInput) -> Result<Vec<Robot>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?.as_slice() {
            &[px, py, vx, vy] => Ok(Robot {
                position: Coords::new(px as isize, py as isize),
                velocity: Coords::new(vx as isize, vy as isize),
            }),
            _ => bail!("invalid robot {line:?}"),
        })
        .collect()
}

fn space(input: &PuzzleInput) -> (isize, isize) {
    if input.is_example() {
        (11, 7)
    } else {
        (101, 103)
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (width, height) = space(input);
    let mut quadrants = [0usize; 4];
    for robot in parse(input)? {
        let c = robot.position_after(100, width, height);
        let quadrant = match (c.x.cmp(&(width / 2)), c.y.cmp(&(height / 2))) {
            (Ordering::Less, Ordering::Less) => 0,
            (Ordering::Greater, Ordering::Less) => 1,
            (Ordering::Less, Ordering::Greater) => 2,
            (Ordering::Greater, Ordering::Greater) => 3,
            _ => continue,
        };
        quadrants[quadrant] += 1;
    }
    Ok(quadrants.iter().product::<usize>().into())
}

/// Second highest number of distinct occupied tiles in one line, which is high on both axes
/// only when the robots draw a rectangle.
fn second_busiest(lines: impl Iterator<Item = isize>) -> usize {
    let mut counts: FxHashMap<isize, usize> = FxHashMap::default();
    for line in lines {
        *counts.entry(line).or_default() += 1;
    }
    let mut counts: Vec<usize> = counts.into_values().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.get(1).copied().unwrap_or(0)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (width, height) = space(input);
    let min_size = if input.is_example() { 4 } else { 20 };
    let robots = parse(input)?;
    // Positions repeat after width * height seconds.
    for seconds in 0..width * height {
        let mut occupied: Vec<Coords> = robots
            .iter()
            .map(|robot| robot.position_after(seconds, width, height))
            .collect();
        occupied.sort_unstable();
        occupied.dedup();
        if second_busiest(occupied.iter().map(|c| c.x)) > min_size
            && second_busiest(occupied.iter().map(|c| c.y)) > min_size
        {
            return Ok(seconds.into());
        }
    }
    bail!("the robots never draw a frame")
}
