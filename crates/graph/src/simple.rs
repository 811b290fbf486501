// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::GraphLike;
use std::collections::HashSet;

/// An undirected graph carrying a payload per node only; adjacency is plain unordered sets.
/// Cheaper than `AttributedGraph` when edges need no data of their own (e.g. plain connectivity
/// queries over a subset of atoms).
pub struct SimpleGraph<N> {
    nodes: Vec<N>,
    adjacency: Vec<HashSet<usize>>,
}

impl<N> SimpleGraph<N> {
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let nodes: Vec<N> = nodes.into_iter().collect();
        let adjacency = vec![HashSet::new(); nodes.len()];
        Self { nodes, adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            return false;
        }
        let inserted_uv = self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        inserted_uv
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|adj| adj.contains(&v))
    }

    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adjacency
            .get(node)
            .map(|adj| adj.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl<N> GraphLike for SimpleGraph<N> {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(node)
    }
}
