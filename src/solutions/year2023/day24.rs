use anyhow::{bail, Context, Result};
use itertools::Itertools;
use nalgebra::{Matrix6, Vector6};

use crate::{numbers_in, Answer, PuzzleInput};

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    position: [i128; 3],
    velocity: [i128; 3],
}

fn parse(input: &PuzzleInput) -> Result<Vec<Hailstone>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match numbers_in(line)?.as_slice() {
            &[px, py, pz, vx, vy, vz] => Ok(Hailstone {
                position: [px as i128, py as i128, pz as i128],
                velocity: [vx as i128, vy as i128, vz as i128],
            }),
            _ => bail!("invalid hailstone {line:?}"),
        })
        .collect()
}

/// Whether the future XY paths of `a` and `b` cross inside `[low, high]` on both axes, using
/// exact integer arithmetic.
fn paths_cross(a: &Hailstone, b: &Hailstone, low: i128, high: i128) -> bool {
    let ([apx, apy, _], [avx, avy, _]) = (a.position, a.velocity);
    let ([bpx, bpy, _], [bvx, bvy, _]) = (b.position, b.velocity);
    let mut det = avx * bvy - avy * bvx;
    if det == 0 {
        return false;
    }
    let (dx, dy) = (bpx - apx, bpy - apy);
    let mut t = dx * bvy - dy * bvx;
    let mut s = dx * avy - dy * avx;
    if det < 0 {
        (det, t, s) = (-det, -t, -s);
    }
    if t < 0 || s < 0 {
        return false;
    }
    let x = apx * det + t * avx;
    let y = apy * det + t * avy;
    (low * det..=high * det).contains(&x) && (low * det..=high * det).contains(&y)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (low, high) = if input.is_example() {
        (7, 27)
    } else {
        (200_000_000_000_000, 400_000_000_000_000)
    };
    let hailstones = parse(input)?;
    let crossings = hailstones
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| paths_cross(a, b, low, high))
        .count();
    Ok(crossings.into())
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rock velocity from the linear system `P x (v_j - v_i) + (p_j - p_i) x V = p_j x v_j - p_i x v_i`
/// over two pairs of hailstones. Positions are taken relative to the first hailstone to keep the
/// floats small.
fn rock_velocity(hailstones: &[Hailstone]) -> Result<[i128; 3]> {
    let [first, ..] = hailstones else {
        bail!("no hailstones");
    };
    let relative = |h: &Hailstone| {
        (
            [0, 1, 2].map(|i| (h.position[i] - first.position[i]) as f64),
            h.velocity.map(|v| v as f64),
        )
    };
    let (p0, v0) = relative(first);
    let mut rows = Vec::with_capacity(36);
    let mut rhs = Vec::with_capacity(6);
    for other in &hailstones[1..3] {
        let (p, v) = relative(other);
        let dv = [0, 1, 2].map(|i| v[i] - v0[i]);
        let dp = [0, 1, 2].map(|i| p[i] - p0[i]);
        rows.extend_from_slice(&[
            0.0, dv[2], -dv[1], 0.0, -dp[2], dp[1],
            -dv[2], 0.0, dv[0], dp[2], 0.0, -dp[0],
            dv[1], -dv[0], 0.0, -dp[1], dp[0], 0.0,
        ]);
        let (a, b) = (cross(p, v), cross(p0, v0));
        rhs.extend((0..3).map(|i| a[i] - b[i]));
    }
    let solution = Matrix6::from_row_slice(&rows)
        .lu()
        .solve(&Vector6::from_row_slice(&rhs))
        .context("hailstone paths are degenerate")?;
    Ok([3, 4, 5].map(|i| solution[i].round() as i128))
}

/// With the velocity known, two hailstones fix the throwing position exactly.
fn rock_position(hailstones: &[Hailstone], velocity: [i128; 3]) -> Option<[i128; 3]> {
    for (a, b) in hailstones.iter().tuple_combinations() {
        let ua = [0, 1, 2].map(|i| velocity[i] - a.velocity[i]);
        let ub = [0, 1, 2].map(|i| velocity[i] - b.velocity[i]);
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let det = ub[i] * ua[j] - ua[i] * ub[j];
            if det == 0 {
                continue;
            }
            let (di, dj) = (a.position[i] - b.position[i], a.position[j] - b.position[j]);
            let numerator = ub[i] * dj - di * ub[j];
            if numerator % det != 0 {
                continue;
            }
            let t = numerator / det;
            return Some([0, 1, 2].map(|k| a.position[k] - t * ua[k]));
        }
    }
    None
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let hailstones = parse(input)?;
    if hailstones.len() < 3 {
        bail!("need at least three hailstones");
    }
    let velocity = rock_velocity(&hailstones)?;
    let position = rock_position(&hailstones, velocity).context("no integer throwing position")?;
    Ok(position.iter().sum::<i128>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        19, 13, 30 @ -2,  1, -2
        18, 19, 22 @ -1, -1, -2
        20, 25, 34 @ -2, -2, -4
        12, 31, 28 @ -1, -2, -1
        20, 19, 15 @  1, -5, -3
    "};

    #[test]
    fn test_day24() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(2));
        assert_eq!(part_b(&input)?, Answer::from(47));
        Ok(())
    }

    #[test]
    fn test_rock_velocity() -> Result<()> {
        let hailstones = parse(&PuzzleInput::example(EXAMPLE))?;
        assert_eq!(rock_velocity(&hailstones)?, [-3, 1, 2]);
        assert_eq!(rock_position(&hailstones, [-3, 1, 2]), Some([24, 13, 10]));
        Ok(())
    }
}
