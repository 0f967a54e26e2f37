#![deny(missing_docs)]

//! Generic node/edge container for the dollar game with connectivity and
//! genus (first Betti number) queries.
//!
//! The genus decides whether a puzzle is well formed and how hard it is; the
//! caller feeds it into the sampler's target sum.

mod config;
mod graph;
mod traverse;

pub use config::GraphConfig;
pub use graph::{Edge, Graph};
