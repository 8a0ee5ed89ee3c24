use anyhow::{bail, Result};
use itertools::Itertools;

use crate::{numbers_in, Answer, PuzzleInput};

type Point = [i64; 3];

fn parse(input: &PuzzleInput) -> Result<Vec<Point>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?[..] {
            [x, y, z] => Ok([x, y, z]),
            _ => bail!("invalid junction box {line:?}"),
        })
        .collect()
}

/// All pairs of boxes, closest first.
fn pairs_by_distance(boxes: &[Point]) -> Vec<(usize, usize)> {
    let distance = |(a, b): &(usize, usize)| -> i64 {
        boxes[*a]
            .iter()
            .zip(&boxes[*b])
            .map(|(p, q)| (p - q) * (p - q))
            .sum()
    };
    (0..boxes.len())
        .tuple_combinations()
        .sorted_by_cached_key(distance)
        .collect()
}

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn connect(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.root(a), self.root(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let boxes = parse(input)?;
    let connections = if input.is_example() { 10 } else { 1000 };
    let mut circuits = Circuits::new(boxes.len());
    for (a, b) in pairs_by_distance(&boxes).into_iter().take(connections) {
        circuits.connect(a, b);
    }
    let product: usize = (0..boxes.len())
        .filter(|&i| circuits.parent[i] == i)
        .map(|i| circuits.size[i])
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .product();
    Ok(product.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let boxes = parse(input)?;
    let mut circuits = Circuits::new(boxes.len());
    for (a, b) in pairs_by_distance(&boxes) {
        circuits.connect(a, b);
        if circuits.count == 1 {
            return Ok((boxes[a][0] * boxes[b][0]).into());
        }
    }
    bail!("the junction boxes never form a single circuit")
}
