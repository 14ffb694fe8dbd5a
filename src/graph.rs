//!
//! Weighted directed graph given as an adjacency matrix
//!
pub mod random;
pub mod samples;

use crate::error::{InvalidGraphError, LoadError};
use crate::matrix::SquareMatrix;
use crate::weight::{from_option, to_option, WeightLike};
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

///
/// Immutable `N x N` weight matrix.
///
/// * `weight_at(i, i) == 0` for all vertices
/// * `weight_at(i, j)` for `i != j` is either a positive edge cost or `W::infinity()` (no edge)
/// * `(N - 1) * max_edge < W::infinity()`, so every simple path sum is below the sentinel
///
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel<W> {
    weights: SquareMatrix<W>,
}

impl<W: WeightLike> GraphModel<W> {
    ///
    /// Validate a caller-supplied matrix and wrap it.
    ///
    /// Every off-diagonal entry must be a positive edge cost or the sentinel,
    /// and a simple path of `N - 1` heaviest edges must stay below the sentinel
    /// so that no real path sum can be mistaken for "unreachable".
    ///
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, InvalidGraphError> {
        let n = rows.len();
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        let mut max_edge = None;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(InvalidGraphError::NotSquare {
                    row: i,
                    len: row.len(),
                    n,
                });
            }
            // NaN is unordered even against itself
            if let Some(j) = row.iter().position(|w| w.partial_cmp(w).is_none()) {
                return Err(InvalidGraphError::NotANumber { i, j });
            }
            if row[i] != W::zero() {
                return Err(InvalidGraphError::NonZeroDiagonal {
                    index: i,
                    value: row[i].to_string(),
                });
            }
            for (j, &w) in row.iter().enumerate() {
                if i == j || w.is_infinite() {
                    continue;
                }
                if w > W::infinity() {
                    return Err(InvalidGraphError::AboveInfinity {
                        i,
                        j,
                        value: w.to_string(),
                    });
                }
                if w <= W::zero() {
                    return Err(InvalidGraphError::NonPositiveWeight {
                        i,
                        j,
                        value: w.to_string(),
                    });
                }
                if max_edge.map_or(true, |m| w > m) {
                    max_edge = Some(w);
                }
            }
        }
        if let Some(max_edge) = max_edge {
            let mut longest = W::zero();
            for _ in 1..n {
                longest = longest + max_edge;
                if longest >= W::infinity() {
                    return Err(InvalidGraphError::PathSumReachesInfinity {
                        n,
                        max_edge: max_edge.to_string(),
                    });
                }
            }
        }
        debug!("graph with {} vertices", n);
        Ok(GraphModel {
            weights: SquareMatrix::from_rows(&rows),
        })
    }
    /// the number of vertices `N`
    pub fn vertex_count(&self) -> usize {
        self.weights.dim()
    }
    /// weight of edge `i -> j`, or the sentinel if there is no edge
    pub fn weight_at(&self, i: usize, j: usize) -> W {
        self.weights[(i, j)]
    }
    /// `i -> j` is a real edge (not a self-loop, not the sentinel).
    /// Off-diagonal weights are positive, so this is the same as `weight_at(i, j) != 0` and finite.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i != j && !self.weight_at(i, j).is_infinite()
    }
    pub fn weights(&self) -> &SquareMatrix<W> {
        &self.weights
    }
    /// iterator over all real edges `(i, j, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.weights
            .iter()
            .filter(|&(i, j, w)| i != j && !w.is_infinite())
    }
    pub fn n_edges(&self) -> usize {
        self.edges().count()
    }
    ///
    /// Convert into petgraph DiGraph.
    /// Node weight is the vertex index, and `NodeIndex::new(i)` corresponds to vertex `i`.
    ///
    pub fn to_digraph(&self) -> DiGraph<usize, W> {
        let n = self.vertex_count();
        let mut g = DiGraph::with_capacity(n, self.n_edges());
        for i in 0..n {
            g.add_node(i);
        }
        for (i, j, w) in self.edges() {
            g.add_edge(NodeIndex::new(i), NodeIndex::new(j), w);
        }
        g
    }
}

///
/// json representation of a graph. `null` means no edge.
///
/// ```text
/// {"weights": [[0, 5, null], [null, 0, 3], [2, null, 0]]}
/// ```
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GraphJson<W> {
    weights: Vec<Vec<Option<W>>>,
}

impl<W: WeightLike + Serialize + DeserializeOwned> GraphModel<W> {
    pub fn from_json_str(s: &str) -> Result<Self, LoadError> {
        let json: GraphJson<W> = serde_json::from_str(s)?;
        Self::from_json(json)
    }
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        let json: GraphJson<W> = serde_json::from_reader(std::io::BufReader::new(file))?;
        Self::from_json(json)
    }
    fn from_json(json: GraphJson<W>) -> Result<Self, LoadError> {
        let rows = json
            .weights
            .into_iter()
            .map(|row| row.into_iter().map(from_option).collect())
            .collect();
        Ok(Self::from_rows(rows)?)
    }
    pub fn to_json_string(&self) -> String {
        let json = GraphJson {
            weights: self
                .weights
                .rows()
                .map(|row| row.iter().map(|&w| to_option(w)).collect())
                .collect(),
        };
        // a matrix of numbers and nulls always serializes
        serde_json::to_string(&json).unwrap()
    }
    pub fn to_json_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_json_string())
    }
}

//
// tests
//
