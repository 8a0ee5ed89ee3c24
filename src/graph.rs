use anyhow::{anyhow, bail, Result};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use rustc_hash::FxHashMap;

use crate::grid::Coords;

#[derive(Debug, Clone)]
pub struct Vertex {
    pub ident: String,
    pub coords: Coords,
}

/// Directed, weighted adjacency graph with at most one edge per ordered pair of vertices.
#[derive(Debug, Default)]
pub struct WeightedGraph {
    graph: DiGraph<Vertex, usize>,
    by_ident: FxHashMap<String, NodeIndex>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing index when a vertex with this ident is already present.
    pub fn add_vertex(&mut self, ident: impl Into<String>, coords: Coords) -> NodeIndex {
        let ident = ident.into();
        if let Some(&index) = self.by_ident.get(&ident) {
            return index;
        }
        let index = self.graph.add_node(Vertex {
            ident: ident.clone(),
            coords,
        });
        self.by_ident.insert(ident, index);
        index
    }

    pub fn vertex_index(&self, ident: &str) -> Option<NodeIndex> {
        self.by_ident.get(ident).copied()
    }

    pub fn vertex(&self, index: NodeIndex) -> &Vertex {
        &self.graph[index]
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns false when the edge already existed.
    pub fn add_unidirectional_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: usize,
    ) -> bool {
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, weight);
        true
    }

    pub fn add_bidirectional_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: usize) -> bool {
        let forward = self.add_unidirectional_edge(a, b, weight);
        let backward = self.add_unidirectional_edge(b, a, weight);
        forward || backward
    }

    pub fn edges_from(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, usize)> + '_ {
        self.graph
            .edges(index)
            .map(|edge| (edge.target(), *edge.weight()))
    }

    pub fn describe(&self) -> String {
        let mut out = String::new();
        for index in self.graph.node_indices() {
            let edges = self
                .edges_from(index)
                .map(|(target, weight)| format!("{}: {weight}", self.graph[target].ident))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{}: {edges}\n", self.graph[index].ident));
        }
        out
    }

    /// Length of the longest path from `start` to `end` that visits no vertex twice.
    pub fn longest_simple_path(&self, start: NodeIndex, end: NodeIndex) -> Result<Option<usize>> {
        if self.len() > 128 {
            bail!("longest path search supports at most 128 vertices, got {}", self.len());
        }
        let mut best = None;
        let mut stack = vec![VertexPath::new(start)];
        while let Some(path) = stack.pop() {
            if path.current == end {
                best = best.max(Some(path.length));
                continue;
            }
            for (next, _) in self.edges_from(path.current) {
                if !path.has_visited(next) {
                    stack.push(path.move_to(self, next)?);
                }
            }
        }
        Ok(best)
    }
}

/// A walk through a [`WeightedGraph`] that remembers which vertices it passed.
#[derive(Debug, Clone, Copy)]
pub struct VertexPath {
    pub current: NodeIndex,
    pub length: usize,
    visited: u128,
}

impl VertexPath {
    pub fn new(start: NodeIndex) -> Self {
        Self {
            current: start,
            length: 0,
            visited: 0,
        }
    }

    pub fn has_visited(&self, vertex: NodeIndex) -> bool {
        vertex == self.current || self.visited & (1u128 << vertex.index()) != 0
    }

    pub fn move_to(&self, graph: &WeightedGraph, vertex: NodeIndex) -> Result<VertexPath> {
        let weight = graph
            .graph
            .find_edge(self.current, vertex)
            .map(|edge| graph.graph[edge])
            .ok_or_else(|| {
                anyhow!(
                    "no edge from {} to {}",
                    graph.vertex(self.current).ident,
                    graph.vertex(vertex).ident
                )
            })?;
        Ok(VertexPath {
            current: vertex,
            length: self.length + weight,
            visited: self.visited | (1u128 << self.current.index()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_not_duplicated() {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("a", Coords::new(0, 0));
        let b = graph.add_vertex("b", Coords::new(1, 0));
        assert_eq!(graph.add_vertex("a", Coords::new(5, 5)), a);
        assert!(graph.add_bidirectional_edge(a, b, 3));
        assert!(!graph.add_bidirectional_edge(b, a, 3));
        assert!(!graph.add_unidirectional_edge(a, b, 7));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.describe(), "a: b: 3\nb: a: 3\n");
    }

    #[test]
    fn test_longest_simple_path() -> Result<()> {
        // a - b - d and a - c - d, plus a shortcut b - c.
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("a", Coords::default());
        let b = graph.add_vertex("b", Coords::default());
        let c = graph.add_vertex("c", Coords::default());
        let d = graph.add_vertex("d", Coords::default());
        graph.add_bidirectional_edge(a, b, 1);
        graph.add_bidirectional_edge(b, d, 1);
        graph.add_bidirectional_edge(a, c, 2);
        graph.add_bidirectional_edge(c, d, 2);
        graph.add_bidirectional_edge(b, c, 10);
        assert_eq!(graph.longest_simple_path(a, d)?, Some(13));

        let path = VertexPath::new(a).move_to(&graph, b)?;
        assert!(path.has_visited(a));
        assert!(path.move_to(&graph, VertexPath::new(a).current).is_ok());
        assert!(VertexPath::new(b).move_to(&graph, b).is_err());
        Ok(())
    }
}
