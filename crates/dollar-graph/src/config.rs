use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`Graph`](crate::Graph).
///
/// Both flags are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are directed. Changes adjacency and the duplicate-edge check.
    pub directed: bool,
    /// Whether an edge may start and end at the same node.
    #[serde(default = "default_allow_self_loops")]
    pub allow_self_loops: bool,
}

fn default_allow_self_loops() -> bool {
    true
}

impl GraphConfig {
    /// Undirected graph that accepts self-loops.
    pub const fn undirected() -> Self {
        Self {
            directed: false,
            allow_self_loops: true,
        }
    }

    /// Directed graph that accepts self-loops.
    pub const fn directed() -> Self {
        Self {
            directed: true,
            allow_self_loops: true,
        }
    }

    /// Returns the same configuration with self-loops rejected.
    pub const fn without_self_loops(self) -> Self {
        Self {
            allow_self_loops: false,
            ..self
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::undirected()
    }
}
