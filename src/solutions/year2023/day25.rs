use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Answer, PuzzleInput};

fn wiring(input: &PuzzleInput) -> Result<UnGraph<&str, ()>> {
    let mut graph = UnGraph::new_undirected();
    let mut nodes: FxHashMap<&str, NodeIndex> = FxHashMap::default();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let (component, others) = line
            .split_once(": ")
            .with_context(|| format!("invalid wiring {line:?}"))?;
        let a = *nodes.entry(component).or_insert_with(|| graph.add_node(component));
        for other in others.split_whitespace() {
            let b = *nodes.entry(other).or_insert_with(|| graph.add_node(other));
            graph.add_edge(a, b, ());
        }
    }
    Ok(graph)
}

/// Unit capacity max flow between `source` and `sink`, stopping once `limit` is exceeded.
/// Returns the flow and the vertices still reachable from `source` in the residual graph.
fn max_flow(
    graph: &UnGraph<&str, ()>,
    source: NodeIndex,
    sink: NodeIndex,
    limit: usize,
) -> (usize, FxHashSet<NodeIndex>) {
    let mut flow: FxHashMap<(NodeIndex, NodeIndex), i32> = FxHashMap::default();
    let mut total = 0;
    loop {
        let mut previous: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        let mut reached: FxHashSet<NodeIndex> = FxHashSet::from_iter([source]);
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            if v == sink {
                break;
            }
            for w in graph.neighbors(v) {
                let residual = 1 - flow.get(&(v, w)).copied().unwrap_or(0);
                if residual > 0 && reached.insert(w) {
                    previous.insert(w, v);
                    queue.push_back(w);
                }
            }
        }
        if !reached.contains(&sink) || total > limit {
            return (total, reached);
        }
        let mut v = sink;
        while let Some(&u) = previous.get(&v) {
            *flow.entry((u, v)).or_default() += 1;
            *flow.entry((v, u)).or_default() -= 1;
            v = u;
        }
        total += 1;
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let graph = wiring(input)?;
    let Some(source) = graph.node_indices().next() else {
        bail!("no components");
    };
    for sink in graph.node_indices().skip(1) {
        let (flow, side) = max_flow(&graph, source, sink, 3);
        if flow == 3 {
            let size = side.len();
            return Ok((size * (graph.node_count() - size)).into());
        }
    }
    bail!("no three wire cut separates the components")
}

pub fn part_b(_input: &PuzzleInput) -> Result<Answer> {
    Ok("no part two".into())
}
