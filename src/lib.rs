//!
//! Floyd-Warshall all-pairs shortest paths, executed one relaxation at a time
//!
pub mod cli;
pub mod driver;
pub mod engine;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod prelude;
pub mod reference;
pub mod session;
pub mod utils;
pub mod weight;

#[macro_use]
extern crate approx;
