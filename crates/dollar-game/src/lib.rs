#![deny(missing_docs)]

//! The dollar game: nodes of a connected graph hold (possibly negative)
//! balances and move dollars to or from all neighbours at once until nobody
//! is in debt.
//!
//! [`Puzzle::randomize`] tunes difficulty by drawing balances whose total
//! sits a fixed offset from the board's genus.

mod config;
mod purse;
mod puzzle;

pub use config::{Difficulty, PuzzleConfig};
pub use purse::Purse;
pub use puzzle::Puzzle;
