use anyhow::{Context, Result};
use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use rustc_hash::FxHashSet;

use crate::{Answer, PuzzleInput};

fn network(input: &PuzzleInput) -> Result<UnGraphMap<&str, ()>> {
    let mut graph = UnGraphMap::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let (a, b) = line
            .split_once('-')
            .with_context(|| format!("invalid connection {line:?}"))?;
        graph.add_edge(a, b, ());
    }
    Ok(graph)
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let graph = network(input)?;
    let mut triangles: FxHashSet<[&str; 3]> = FxHashSet::default();
    for a in graph.nodes().filter(|name| name.starts_with('t')) {
        let neighbours: Vec<&str> = graph.neighbors(a).collect();
        for (&b, &c) in neighbours.iter().tuple_combinations() {
            if graph.contains_edge(b, c) {
                let mut triangle = [a, b, c];
                triangle.sort_unstable();
                triangles.insert(triangle);
            }
        }
    }
    Ok(triangles.len().into())
}

/// Bron-Kerbosch with pivoting.
fn largest_clique<'a>(
    graph: &UnGraphMap<&'a str, ()>,
    clique: &mut Vec<&'a str>,
    mut candidates: FxHashSet<&'a str>,
    mut excluded: FxHashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() && clique.len() > best.len() {
            best.clone_from(clique);
        }
        return;
    }
    let Some(pivot) = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|&v| graph.neighbors(v).count())
    else {
        return;
    };
    let pivot_neighbours: FxHashSet<&str> = graph.neighbors(pivot).collect();
    let remaining: Vec<&'a str> = candidates
        .iter()
        .copied()
        .filter(|v| !pivot_neighbours.contains(v))
        .collect();
    for v in remaining {
        let neighbours: FxHashSet<&'a str> = graph.neighbors(v).collect();
        clique.push(v);
        largest_clique(
            graph,
            clique,
            candidates.intersection(&neighbours).copied().collect(),
            excluded.intersection(&neighbours).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let graph = network(input)?;
    let mut best = Vec::new();
    largest_clique(
        &graph,
        &mut Vec::new(),
        graph.nodes().collect(),
        FxHashSet::default(),
        &mut best,
    );
    best.sort_unstable();
    Ok(best.join(",").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ta-kb
        kb-co
        co-ta
        co-de
        de-kb
        de-ta
        xy-zz
    "};

    #[test]
    fn test_day23() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(3));
        assert_eq!(part_b(&input)?, Answer::from("co,de,kb,ta"));
        Ok(())
    }
}
