use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use dollar_core::errors::{graph_error, DollarError};
use dollar_core::{codes, NodeId};
use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::traverse;

/// A single edge between two node ids.
///
/// For undirected graphs `(a, b)` and `(b, a)` denote the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Starting node (irrelevant for undirected graphs).
    pub start: NodeId,
    /// Ending node.
    pub end: NodeId,
    /// Caller defined weight, zero unless set.
    pub weight: i32,
}

impl Edge {
    /// Creates an edge from `start` to `end`.
    pub const fn new(start: NodeId, end: NodeId, weight: i32) -> Self {
        Self { start, end, weight }
    }

    /// Returns whether either endpoint is `id`.
    pub fn touches(&self, id: NodeId) -> bool {
        self.start == id || self.end == id
    }

    /// Returns whether this edge joins `start` and `end`, ignoring orientation
    /// unless `directed` is set.
    pub fn joins(&self, start: NodeId, end: NodeId, directed: bool) -> bool {
        (self.start == start && self.end == end)
            || (!directed && self.start == end && self.end == start)
    }

    /// Returns the endpoint opposite to `id`.
    pub fn opposite(&self, id: NodeId) -> NodeId {
        if self.start == id {
            self.end
        } else {
            self.start
        }
    }
}

/// Generic node/edge container with connectivity and genus queries.
///
/// Nodes map a caller chosen [`NodeId`] to an owned payload and are kept in
/// ascending id order. Edges are kept in insertion order.
///
/// Removing a node does not remove its edges. Callers either clear them with
/// [`Graph::remove_edges_with_node`] first or use
/// [`Graph::remove_node_cascade`]. Edges left behind are *dangling*: they still
/// count toward [`Graph::num_edges`] and the genus, adjacency queries may still
/// report the removed id, and connectivity traversal never visits an id that
/// is not a node.
///
/// The engine does no internal locking; share it behind a single writer or
/// hand readers a [`Graph::try_clone`] snapshot.
#[derive(Debug)]
pub struct Graph<T> {
    config: GraphConfig,
    nodes: BTreeMap<NodeId, T>,
    edges: Vec<Edge>,
}

impl<T> Graph<T> {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns the smallest non-negative id not used by any node.
    pub fn unique_id(&self) -> NodeId {
        let mut candidate = 0u64;
        for id in self.nodes.keys() {
            if id.as_raw() != candidate {
                break;
            }
            candidate += 1;
        }
        NodeId::from_raw(candidate)
    }

    /// Inserts a node and returns the node count after insertion.
    pub fn add_node(&mut self, id: NodeId, payload: T) -> Result<usize, DollarError> {
        if self.nodes.contains_key(&id) {
            return Err(graph_error(codes::DUPLICATE_ID, "node id is already in use")
                .with_context("node", id)
                .with_hint("pick a fresh id with unique_id()"));
        }
        self.nodes.insert(id, payload);
        Ok(self.nodes.len())
    }

    /// Inserts a node under [`Graph::unique_id`] and returns that id.
    pub fn add_node_auto(&mut self, payload: T) -> NodeId {
        let id = self.unique_id();
        self.nodes.insert(id, payload);
        id
    }

    /// Adds an unweighted edge. See [`Graph::add_weighted_edge`].
    pub fn add_edge(&mut self, start: NodeId, end: NodeId) -> Result<usize, DollarError> {
        self.add_weighted_edge(start, end, 0)
    }

    /// Appends an edge and returns the edge count after insertion.
    ///
    /// Fails with `duplicate-edge` if the two ids are already joined (in
    /// either orientation for undirected graphs) and with `self-loop` if the
    /// configuration forbids `start == end`. Endpoints are not checked
    /// against the node set.
    pub fn add_weighted_edge(
        &mut self,
        start: NodeId,
        end: NodeId,
        weight: i32,
    ) -> Result<usize, DollarError> {
        if start == end && !self.config.allow_self_loops {
            return Err(
                graph_error(codes::SELF_LOOP, "self-loops are disabled for this graph")
                    .with_context("node", start),
            );
        }
        if self.edge_index(start, end).is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                start = start.as_raw(),
                end = end.as_raw(),
                "rejected duplicate edge"
            );
            return Err(graph_error(codes::DUPLICATE_EDGE, "edge already exists")
                .with_context("start", start)
                .with_context("end", end));
        }
        self.edges.push(Edge::new(start, end, weight));
        Ok(self.edges.len())
    }

    /// Returns the index of the edge joining `start` and `end`, honouring
    /// the graph's directedness.
    pub fn edge_index(&self, start: NodeId, end: NodeId) -> Option<usize> {
        let directed = self.config.directed;
        self.edges
            .iter()
            .position(|edge| edge.joins(start, end, directed))
    }

    /// Returns the edge stored at `index`.
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns every edge with `id` as either endpoint.
    pub fn edges_of(&self, id: NodeId) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.touches(id)).collect()
    }

    /// Removes the first edge joining `start` and `end`.
    pub fn remove_edge(&mut self, start: NodeId, end: NodeId) -> bool {
        match self.edge_index(start, end) {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every edge touching `id` and returns how many were removed.
    pub fn remove_edges_with_node(&mut self, id: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        before - self.edges.len()
    }

    /// Removes the node entry only; its edges are left dangling.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    /// Removes the node together with every edge touching it.
    pub fn remove_node_cascade(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        self.remove_edges_with_node(id);
        self.remove_node(id)
    }

    /// Removes all nodes. Edges are kept, like [`Graph::remove_node`].
    pub fn remove_all_nodes(&mut self) {
        self.nodes.clear();
    }

    /// Removes all edges.
    pub fn remove_all_edges(&mut self) {
        self.edges.clear();
    }

    /// Returns whether an edge joins `start` to `end`.
    pub fn is_adjacent(&self, start: NodeId, end: NodeId) -> bool {
        self.edge_index(start, end).is_some()
    }

    /// Returns the neighbours of `id` using the graph's own directedness.
    pub fn adjacent_to(&self, id: NodeId) -> Vec<NodeId> {
        self.adjacent_with_direction(id, self.config.directed)
    }

    /// Returns the neighbours of `id`.
    ///
    /// With `directed` only outbound neighbours are listed; otherwise every
    /// edge touching `id` contributes its opposite endpoint, whatever its
    /// stored orientation. A self-loop lists `id` once.
    pub fn adjacent_with_direction(&self, id: NodeId, directed: bool) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|edge| edge.touches(id))
            .filter_map(|edge| {
                if !directed {
                    Some(edge.opposite(id))
                } else if edge.start == id {
                    Some(edge.end)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns whether every node is reachable from every other, ignoring
    /// edge direction.
    ///
    /// A graph without nodes or without edges is not connected, and neither
    /// is a single node without a self-loop.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.nodes.keys().next().copied() else {
            return false;
        };
        if self.edges.is_empty() {
            return false;
        }
        let visited = traverse::reachable_from(self, start);
        visited.len() == self.nodes.len()
    }

    /// Returns the first Betti number `edges - nodes + 1`.
    ///
    /// Fails with `not-connected` unless [`Graph::is_connected`] holds.
    pub fn genus(&self) -> Result<i64, DollarError> {
        if !self.is_connected() {
            return Err(graph_error(
                codes::NOT_CONNECTED,
                "genus is only defined for connected graphs",
            )
            .with_context("nodes", self.nodes.len())
            .with_context("edges", self.edges.len()));
        }
        Ok(self.edges.len() as i64 - self.nodes.len() as i64 + 1)
    }

    /// Returns the payload stored for `id`.
    pub fn node(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(&id)
    }

    /// Returns the payload stored for `id` mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(&id)
    }

    /// Returns whether `id` names a node.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the first id whose payload equals `payload`.
    pub fn find_node(&self, payload: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        self.nodes
            .iter()
            .find(|(_, candidate)| *candidate == payload)
            .map(|(id, _)| *id)
    }

    /// Returns all node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Iterates `(id, payload)` pairs in ascending id order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &T)> + '_ {
        self.nodes.iter().map(|(id, payload)| (*id, payload))
    }

    /// Iterates payloads mutably in ascending id order.
    pub fn payloads_mut(&mut self) -> btree_map::ValuesMut<'_, NodeId, T> {
        self.nodes.values_mut()
    }

    /// Iterates payloads in ascending id order. Each call starts afresh.
    pub fn iter(&self) -> btree_map::Values<'_, NodeId, T> {
        self.nodes.values()
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, dangling ones included.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Copies the graph by replaying every node insertion.
    ///
    /// Payloads are cloned; wrap them in `Rc`/`Arc` to share them instead.
    /// A duplicate id during the replay means the source was corrupt and is
    /// reported as `clone-inconsistent`.
    pub fn try_clone(&self) -> Result<Self, DollarError>
    where
        T: Clone,
    {
        let mut copy = Graph::new(self.config);
        for (id, payload) in &self.nodes {
            if let Err(err) = copy.add_node(*id, payload.clone()) {
                #[cfg(feature = "tracing")]
                tracing::error!(node = id.as_raw(), %err, "graph copy replayed a duplicate node id");
                return Err(graph_error(
                    codes::CLONE_INCONSISTENT,
                    "source graph produced a duplicate node id while copying",
                )
                .with_context("node", id)
                .with_context("cause", err.code()));
            }
        }
        copy.edges = self.edges.clone();
        Ok(copy)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<'a, T> IntoIterator for &'a Graph<T> {
    type Item = &'a T;
    type IntoIter = btree_map::Values<'a, NodeId, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " Nodes[{}]:", self.nodes.len())?;
        for (id, payload) in &self.nodes {
            write!(f, " ({id}: {payload})")?;
        }
        writeln!(f)?;
        write!(f, " Edges[{}]:", self.edges.len())?;
        for edge in &self.edges {
            write!(f, " ({}, {}: {})", edge.start, edge.end, edge.weight)?;
        }
        Ok(())
    }
}
