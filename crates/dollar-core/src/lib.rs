#![deny(missing_docs)]

//! Core identifiers, error types and seeded randomness shared by the dollar
//! game crates.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{codes, DollarError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a graph.
///
/// Ids are chosen by the caller (or by `unique_id`) and stay stable for the
/// lifetime of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
