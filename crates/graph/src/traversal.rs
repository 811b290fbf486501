// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::GraphLike;
use std::collections::{HashMap, HashSet, VecDeque};

/// Result of a `bfs` call: every node reached, and the tree it was reached through.
pub struct BfsResult {
    pub visited: HashSet<usize>,
    pub parent: HashMap<usize, Option<usize>>,
}

/// Breadth-first traversal from `source`.
///
/// `stop` is checked before a node is expanded; if it returns `true` the traversal ends
/// immediately (the stopping node is still recorded as visited). `filter` is checked before a
/// neighbour is enqueued; neighbours it rejects are never visited or counted as parents of
/// anything else.
pub fn bfs(
    graph: &impl GraphLike,
    source: usize,
    mut stop: impl FnMut(usize) -> bool,
    mut filter: impl FnMut(usize) -> bool,
) -> BfsResult {
    let mut visited = HashSet::new();
    let mut parent = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    parent.insert(source, None);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        if stop(node) {
            break;
        }
        for next in graph.neighbors(node) {
            if visited.contains(&next) || !filter(next) {
                continue;
            }
            visited.insert(next);
            parent.insert(next, Some(node));
            queue.push_back(next);
        }
    }

    BfsResult { visited, parent }
}

/// Partitions the graph's nodes into connected components, optionally restricted to nodes for
/// which `filter` returns `true` (nodes rejected by `filter` are excluded from every component
/// and do not propagate connectivity through themselves).
///
/// Returns the component count and the member set of each component.
pub fn connected_components(
    graph: &impl GraphLike,
    mut filter: impl FnMut(usize) -> bool,
) -> (usize, Vec<HashSet<usize>>) {
    let mut seen = HashSet::new();
    let mut components = Vec::new();

    for start in 0..graph.node_count() {
        if seen.contains(&start) || !filter(start) {
            continue;
        }
        let BfsResult { visited, .. } = bfs(graph, start, |_| false, &mut filter);
        seen.extend(visited.iter().copied());
        components.push(visited);
    }

    (components.len(), components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleGraph;

    fn path_graph(n: usize) -> SimpleGraph<()> {
        let mut g = SimpleGraph::with_nodes((0..n).map(|_| ()));
        for i in 0..n.saturating_sub(1) {
            g.add_edge(i, i + 1);
        }
        g
    }

    #[test]
    fn bfs_visits_whole_path() {
        let g = path_graph(5);
        let result = bfs(&g, 0, |_| false, |_| true);
        assert_eq!(result.visited.len(), 5);
        assert_eq!(result.parent[&4], Some(3));
    }

    #[test]
    fn bfs_stop_predicate_halts_early() {
        let g = path_graph(5);
        let result = bfs(&g, 0, |n| n == 2, |_| true);
        assert!(result.visited.contains(&2));
        assert!(!result.visited.contains(&4) || result.visited.len() <= 3);
    }

    #[test]
    fn connected_components_splits_disjoint_paths() {
        let mut g = SimpleGraph::with_nodes((0..6).map(|_| ()));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(3, 4);
        // node 5 stays isolated
        let (count, components) = connected_components(&g, |_| true);
        assert_eq!(count, 3);
        let sizes: Vec<usize> = {
            let mut s: Vec<usize> = components.iter().map(|c| c.len()).collect();
            s.sort_unstable();
            s
        };
        assert_eq!(sizes, vec![1, 2, 3]);
    }

    #[test]
    fn connected_components_respects_filter() {
        let g = path_graph(5);
        let (count, components) = connected_components(&g, |n| n != 2);
        // removing node 2 from consideration splits {0,1} and {3,4}
        assert_eq!(count, 2);
        assert!(components.iter().all(|c| !c.contains(&2)));
    }
}
