// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;

use graph::{AttributedGraph, EdgeId};

/// Bond order. `0` is "unknown" (e.g. a guessed bond before a guesser fills it in).
pub type BondOrder = u8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bond {
    pub order: BondOrder,
    pub aromatic: bool,
    pub guessed_topology: bool,
    pub guessed_order: bool,
}

impl Bond {
    pub fn new() -> Self {
        Self {
            order: 0,
            aromatic: false,
            guessed_topology: false,
            guessed_order: false,
        }
    }

    pub fn guessed(order: BondOrder) -> Self {
        Self {
            order,
            aromatic: false,
            guessed_topology: true,
            guessed_order: true,
        }
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self::new()
    }
}

/// Undirected graph over atom indices. Thin domain wrapper around `AttributedGraph`, which
/// already gives bond edges their arena-indexed, shared-ownership-free storage (§9's "place the
/// bond record once in an arena indexed by edge id" design note).
pub struct BondGraph {
    graph: AttributedGraph<(), Bond>,
    incomplete_topology: bool,
}

impl BondGraph {
    pub fn new(num_atoms: usize) -> Self {
        Self {
            graph: AttributedGraph::with_nodes((0..num_atoms).map(|_| ())),
            incomplete_topology: false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn incomplete_topology(&self) -> bool {
        self.incomplete_topology
    }

    pub fn set_incomplete_topology(&mut self, value: bool) {
        self.incomplete_topology = value;
    }

    /// Grows or shrinks the node set to match a resized atom kind. Shrinking drops the trailing
    /// nodes (and any edges touching them, via the underlying arena).
    pub fn resize(&mut self, n: usize) {
        while self.graph.node_count() < n {
            self.graph.add_node(());
        }
        if self.graph.node_count() > n {
            self.graph = AttributedGraph::with_nodes((0..n).map(|_| ()));
        }
    }

    pub fn find_edge(&self, u: usize, v: usize) -> Option<EdgeId> {
        self.graph.find_edge(u, v)
    }

    /// Refuses `u == v`. Returns the existing edge if one is already present.
    pub fn ensure_edge(&mut self, u: usize, v: usize, bond: Bond) -> Option<EdgeId> {
        if u == v {
            return None;
        }
        if let Some(id) = self.graph.find_edge(u, v) {
            return Some(id);
        }
        self.graph.add_edge(u, v, bond)
    }

    pub fn add_edge(&mut self, u: usize, v: usize, bond: Bond) -> Option<EdgeId> {
        self.graph.add_edge(u, v, bond)
    }

    pub fn edge(&self, u: usize, v: usize) -> Option<(EdgeId, &Bond)> {
        let id = self.graph.find_edge(u, v)?;
        self.graph.edge(id).map(|(_, _, bond)| (id, bond))
    }

    pub fn bond(&self, id: EdgeId) -> Option<&Bond> {
        self.graph.edge(id).map(|(_, _, bond)| bond)
    }

    pub fn bond_mut(&mut self, id: EdgeId) -> Option<&mut Bond> {
        self.graph.edge_mut(id)
    }

    pub fn neighbours(&self, u: usize) -> Vec<usize> {
        self.graph.neighbors(u)
    }

    /// Union of `indices` with every atom bonded to any of them.
    pub fn bonded_closure(&self, indices: &[usize]) -> BTreeSet<usize> {
        let mut closure: BTreeSet<usize> = indices.iter().copied().collect();
        for &i in indices {
            closure.extend(self.graph.neighbors(i));
        }
        closure
    }

    /// Deduplicated set of edges incident to any atom in `indices`.
    pub fn collect_edges(&self, indices: &[usize]) -> BTreeSet<EdgeId> {
        let mut edges = BTreeSet::new();
        for &i in indices {
            edges.extend(self.graph.edges_of(i));
        }
        edges
    }

    pub fn clear_edges(&mut self) {
        self.graph.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_edge_is_idempotent() {
        let mut g = BondGraph::new(3);
        let id1 = g.ensure_edge(0, 1, Bond::guessed(1)).unwrap();
        let id2 = g.ensure_edge(0, 1, Bond::guessed(2)).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(g.bond(id1).unwrap().order, 1);
    }

    #[test]
    fn bonded_closure_includes_neighbours() {
        let mut g = BondGraph::new(4);
        g.add_edge(0, 1, Bond::new());
        g.add_edge(1, 2, Bond::new());
        let closure = g.bonded_closure(&[0]);
        assert_eq!(closure, BTreeSet::from([0, 1]));
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = BondGraph::new(2);
        assert!(g.ensure_edge(0, 0, Bond::new()).is_none());
    }

    #[test]
    fn collect_edges_dedupes_shared_atoms() {
        let mut g = BondGraph::new(3);
        g.add_edge(0, 1, Bond::new());
        g.add_edge(1, 2, Bond::new());
        let edges = g.collect_edges(&[0, 1, 2]);
        assert_eq!(edges.len(), 2);
    }
}
