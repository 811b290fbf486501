// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;

use crate::GraphLike;

/// Stable identifier for an edge. Remains valid (though possibly pointing at a removed edge)
/// across further insertions, so callers may cache it the way the bond graph caches bond ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(EdgeIndex);

/// An undirected graph with a payload per node and per edge.
///
/// Built on `petgraph::stable_graph::StableUnGraph`, the same graph the teacher's own molecule
/// representation uses for its bond/atom graph: node and edge indices stay valid across further
/// insertions (and, for nodes, as long as none are removed -- this type never removes a node,
/// only grows or fully rebuilds, so `NodeIndex::index()` always matches the `usize` the rest of
/// this crate addresses atoms by).
pub struct AttributedGraph<N, E> {
    graph: StableUnGraph<N, E>,
}

impl<N, E> AttributedGraph<N, E> {
    pub fn new() -> Self {
        Self { graph: StableUnGraph::with_capacity(0, 0) }
    }

    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = StableUnGraph::with_capacity(0, 0);
        for node in nodes {
            graph.add_node(node);
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn add_node(&mut self, payload: N) -> usize {
        self.graph.add_node(payload).index()
    }

    pub fn node(&self, index: usize) -> Option<&N> {
        self.graph.node_weight(NodeIndex::new(index))
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut N> {
        self.graph.node_weight_mut(NodeIndex::new(index))
    }

    /// Returns the edge between `u` and `v` if one already exists, in either direction.
    pub fn find_edge(&self, u: usize, v: usize) -> Option<EdgeId> {
        self.graph.find_edge(NodeIndex::new(u), NodeIndex::new(v)).map(EdgeId)
    }

    /// Inserts a new edge `u`-`v`. Returns `None` if `u == v` (no self-loops) or if an edge
    /// already exists between them (no multi-edges) — the caller should check `find_edge`
    /// first if it wants the existing payload in that case.
    pub fn add_edge(&mut self, u: usize, v: usize, payload: E) -> Option<EdgeId> {
        if u == v || self.find_edge(u, v).is_some() {
            return None;
        }
        Some(EdgeId(self.graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), payload)))
    }

    pub fn edge(&self, id: EdgeId) -> Option<(usize, usize, &E)> {
        let (a, b) = self.graph.edge_endpoints(id.0)?;
        let payload = self.graph.edge_weight(id.0)?;
        Some((a.index(), b.index(), payload))
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.graph.edge_weight_mut(id.0)
    }

    pub fn edges_of(&self, node: usize) -> Vec<EdgeId> {
        self.graph.edges(NodeIndex::new(node)).map(|edge| EdgeId(edge.id())).collect()
    }

    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.graph.neighbors(NodeIndex::new(node)).map(|n| n.index()).collect()
    }

    pub fn remove_edge(&mut self, id: EdgeId) {
        self.graph.remove_edge(id.0);
    }

    /// Removes every edge but keeps all nodes.
    pub fn clear_edges(&mut self) {
        let edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        for id in edges {
            self.graph.remove_edge(id);
        }
    }
}

impl<N, E> Default for AttributedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> GraphLike for AttributedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_loops_and_duplicates() {
        let mut g: AttributedGraph<(), u8> = AttributedGraph::with_nodes([(), (), ()]);
        assert!(g.add_edge(0, 0, 1).is_none());
        assert!(g.add_edge(0, 1, 1).is_some());
        assert!(g.add_edge(0, 1, 2).is_none());
        assert!(g.add_edge(1, 0, 2).is_none());
    }

    #[test]
    fn edge_ids_survive_unrelated_removal() {
        let mut g: AttributedGraph<(), u8> = AttributedGraph::with_nodes([(), (), ()]);
        let e01 = g.add_edge(0, 1, 10).unwrap();
        let e12 = g.add_edge(1, 2, 20).unwrap();
        g.remove_edge(e01);
        assert_eq!(g.edge(e12).unwrap().2, &20);
        assert!(g.edge(e01).is_none());
        assert_eq!(g.neighbors(1), vec![2]);
    }

    #[test]
    fn clear_edges_keeps_nodes() {
        let mut g: AttributedGraph<(), u8> = AttributedGraph::with_nodes([(), ()]);
        g.add_edge(0, 1, 1);
        g.clear_edges();
        assert_eq!(g.node_count(), 2);
        assert!(g.neighbors(0).is_empty());
    }
}
