use std::fmt;

use dollar_core::codes;
use dollar_core::errors::{game_error, DollarError};
use dollar_core::rng::RngHandle;
use dollar_core::NodeId;
use dollar_graph::{Graph, GraphConfig};
use dollar_sample::{sample_with, SampleRequest};

use crate::config::PuzzleConfig;
use crate::purse::Purse;

/// A dollar game board: an undirected graph whose nodes hold balances.
///
/// A node gives by sending one dollar along each of its edges and takes by
/// pulling one dollar along each. The puzzle is solved once nobody is in
/// debt.
#[derive(Debug)]
pub struct Puzzle {
    graph: Graph<Purse>,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    /// Creates an empty puzzle.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(GraphConfig::undirected().without_self_loops()),
        }
    }

    /// Read access to the underlying graph.
    pub fn graph(&self) -> &Graph<Purse> {
        &self.graph
    }

    /// Independent copy of the board, balances and move counters included.
    pub fn snapshot(&self) -> Result<Self, DollarError> {
        Ok(Self {
            graph: self.graph.try_clone()?,
        })
    }

    /// Adds a node holding `balance` and returns its id.
    pub fn add_node(&mut self, balance: i64) -> NodeId {
        self.graph.add_node_auto(Purse::new(balance))
    }

    /// Joins two existing nodes.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), DollarError> {
        self.require(a)?;
        self.require(b)?;
        self.graph.add_edge(a, b)?;
        Ok(())
    }

    /// Removes the edge between `a` and `b`, if any.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> bool {
        self.graph.remove_edge(a, b)
    }

    /// Removes a node and all of its edges.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        self.graph.remove_node_cascade(id)
    }

    /// Returns the purse of `id`.
    pub fn purse(&self, id: NodeId) -> Option<&Purse> {
        self.graph.node(id)
    }

    /// Returns the balance of `id`.
    pub fn balance(&self, id: NodeId) -> Option<i64> {
        self.graph.node(id).map(|purse| purse.balance)
    }

    /// Overwrites the balance of `id`.
    pub fn set_balance(&mut self, id: NodeId, balance: i64) -> Result<(), DollarError> {
        self.purse_mut(id)?.balance = balance;
        Ok(())
    }

    /// Number of edges touching `id`.
    pub fn degree(&self, id: NodeId) -> usize {
        self.graph.adjacent_to(id).len()
    }

    /// `id` sends one dollar to each neighbour.
    pub fn give(&mut self, id: NodeId) -> Result<(), DollarError> {
        self.transfer(id, -1)?;
        self.purse_mut(id)?.gives += 1;
        Ok(())
    }

    /// `id` receives one dollar from each neighbour.
    pub fn take(&mut self, id: NodeId) -> Result<(), DollarError> {
        self.transfer(id, 1)?;
        self.purse_mut(id)?.takes += 1;
        Ok(())
    }

    // Moves `delta` to `id` from every neighbour.
    fn transfer(&mut self, id: NodeId, delta: i64) -> Result<(), DollarError> {
        self.require(id)?;
        let neighbours = self.graph.adjacent_to(id);
        for neighbour in &neighbours {
            if let Some(purse) = self.graph.node_mut(*neighbour) {
                purse.balance -= delta;
            }
        }
        self.purse_mut(id)?.balance += delta * neighbours.len() as i64;
        Ok(())
    }

    /// Returns whether every balance is non-negative.
    pub fn is_solved(&self) -> bool {
        self.graph.iter().all(Purse::is_solvent)
    }

    /// Sum of all balances.
    pub fn total(&self) -> i64 {
        self.graph.iter().map(|purse| purse.balance).sum()
    }

    /// Genus of the board, or `None` while it is disconnected.
    pub fn genus(&self) -> Option<i64> {
        self.graph.genus().ok()
    }

    /// Returns whether the board is connected.
    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    /// Returns whether a connected board holds at least its genus in total,
    /// which guarantees a winning sequence of moves exists.
    pub fn is_guaranteed_solvable(&self) -> bool {
        self.genus().is_some_and(|genus| self.total() >= genus)
    }

    /// Draws fresh balances for every node.
    ///
    /// The target total is the difficulty offset plus the genus; a
    /// disconnected board uses the offset alone. Values are assigned in
    /// ascending node id order and move counters are reset. On error the
    /// balances are left untouched.
    pub fn randomize(&mut self, config: &PuzzleConfig, rng: &mut RngHandle) -> Result<(), DollarError> {
        config.validate()?;
        let offset = config.difficulty.offset();
        let sum = match self.genus() {
            Some(genus) => offset + genus,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    nodes = self.graph.num_nodes(),
                    "randomizing disconnected puzzle without genus"
                );
                offset
            }
        };
        let request = SampleRequest::new(self.graph.num_nodes(), sum, config.floor, config.ceiling);
        let values = sample_with(config.strategy, &request, rng)?;
        for (purse, value) in self.graph.payloads_mut().zip(values) {
            purse.balance = i64::from(value);
            purse.reset_moves();
        }
        Ok(())
    }

    fn require(&self, id: NodeId) -> Result<(), DollarError> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(unknown_node(id))
        }
    }

    fn purse_mut(&mut self, id: NodeId) -> Result<&mut Purse, DollarError> {
        self.graph.node_mut(id).ok_or_else(|| unknown_node(id))
    }
}

fn unknown_node(id: NodeId) -> DollarError {
    game_error(codes::UNKNOWN_NODE, "no node with this id").with_context("node", id)
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph)
    }
}
