//!
//! Error types
//!
use thiserror::Error;

///
/// Reasons a weight matrix is rejected as a graph.
///
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidGraphError {
    /// graph with no vertices
    #[error("graph must have at least one vertex")]
    Empty,

    #[error("matrix is not square: row {row} has {len} entries but there are {n} rows")]
    NotSquare { row: usize, len: usize, n: usize },

    /// self-distance must be zero
    #[error("diagonal entry ({index}, {index}) is {value}, expected 0")]
    NonZeroDiagonal { index: usize, value: String },

    #[error("weight ({i}, {j}) = {value} exceeds the unreachable sentinel")]
    AboveInfinity { i: usize, j: usize, value: String },

    /// edge costs must be strictly positive
    #[error("weight ({i}, {j}) = {value} is not a positive edge cost")]
    NonPositiveWeight { i: usize, j: usize, value: String },

    #[error("weight ({i}, {j}) is NaN")]
    NotANumber { i: usize, j: usize },

    /// a simple path over all vertices could reach the sentinel
    #[error("{n} vertices with an edge of {max_edge} can make a path as long as the unreachable sentinel")]
    PathSumReachesInfinity { n: usize, max_edge: String },
}

///
/// Failures while reading a graph from a file or a json string.
///
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidGraph(#[from] InvalidGraphError),
}
