use std::collections::{BTreeMap, BTreeSet};

use dollar_core::NodeId;

use crate::graph::Graph;

/// Collects every node reachable from `start` over the undirected view of the
/// graph. Edge endpoints that are not nodes (dangling edges) are skipped.
pub(crate) fn reachable_from<T>(graph: &Graph<T>, start: NodeId) -> BTreeSet<NodeId> {
    let adjacency = undirected_adjacency(graph);
    let mut visited = BTreeSet::new();
    if graph.contains_node(start) {
        dfs(start, &adjacency, &mut visited);
    }
    visited
}

fn undirected_adjacency<T>(graph: &Graph<T>) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
    let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for edge in graph.edges() {
        if !graph.contains_node(edge.start) || !graph.contains_node(edge.end) {
            continue;
        }
        adjacency.entry(edge.start).or_default().insert(edge.end);
        adjacency.entry(edge.end).or_default().insert(edge.start);
    }
    adjacency
}

fn dfs(
    start: NodeId,
    adjacency: &BTreeMap<NodeId, BTreeSet<NodeId>>,
    visited: &mut BTreeSet<NodeId>,
) {
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(neighbours) = adjacency.get(&node) {
            stack.extend(neighbours.iter().filter(|n| !visited.contains(*n)));
        }
    }
}
