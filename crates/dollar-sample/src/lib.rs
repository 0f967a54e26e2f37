#![deny(missing_docs)]

//! Samplers for fixed-length integer sequences with bounded values and an
//! exact sum.
//!
//! The exact sampler enumerates every multiset through a stars-and-bars bit
//! encoding, counts the ones with the requested sum, then draws one of them
//! uniformly. The encoding is limited to 32 slots; [`split_sample`] covers
//! larger requests without the uniformity guarantee.

pub mod combinatorics;
mod split;
mod strategy;
mod uniform;

pub use split::split_sample;
pub use strategy::{sample_with, SamplingStrategy};
pub use uniform::{nth_solution, sample, select, solution_count, Layout, SampleRequest};
