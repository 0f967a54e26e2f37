use std::fmt;

use serde::{Deserialize, Serialize};

/// Node payload of a puzzle: the dollars a node holds and how often it has
/// moved them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purse {
    /// Current balance; negative means the node is in debt.
    pub balance: i64,
    /// Number of gives performed by this node.
    pub gives: u32,
    /// Number of takes performed by this node.
    pub takes: u32,
}

impl Purse {
    /// Creates a purse with the given balance and no recorded moves.
    pub const fn new(balance: i64) -> Self {
        Self {
            balance,
            gives: 0,
            takes: 0,
        }
    }

    /// Returns whether the node is out of debt.
    pub const fn is_solvent(&self) -> bool {
        self.balance >= 0
    }

    pub(crate) fn reset_moves(&mut self) {
        self.gives = 0;
        self.takes = 0;
    }
}

impl fmt::Display for Purse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.balance)
    }
}
