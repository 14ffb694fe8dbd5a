//!
//! Stepwise Floyd-Warshall
//!
//! The triple loop
//!
//! ```text
//! for k in 0..n
//!   for i in 0..n
//!     for j in 0..n
//!       relax (i, j) via k
//! ```
//!
//! is externalized into an explicit cursor `(k, i, j)`, so that each call of
//! `FloydWarshallEngine::step` performs exactly one relaxation check.
//!
use crate::graph::GraphModel;
use crate::matrix::SquareMatrix;
use crate::weight::{to_option, DisplayWeight, WeightLike};
use derive_new::new;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

///
/// Position `(k, i, j)` of the next relaxation check.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, new,
)]
pub struct Cursor {
    /// intermediate vertex
    pub k: usize,
    /// source vertex
    pub i: usize,
    /// target vertex
    pub j: usize,
}

impl Cursor {
    ///
    /// Row-major over `(i, j)` nested inside `k`.
    ///
    pub fn next(self, n: usize) -> Cursor {
        let Cursor { mut k, mut i, mut j } = self;
        j += 1;
        if j >= n {
            j = 0;
            i += 1;
            if i >= n {
                i = 0;
                k += 1;
            }
        }
        Cursor { k, i, j }
    }
    /// all triples have been processed
    pub fn is_exhausted(&self, n: usize) -> bool {
        self.k >= n
    }
    /// how many relaxations precede this cursor
    pub fn rank(&self, n: usize) -> usize {
        (self.k * n + self.i) * n + self.j
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "k={} i={} j={}", self.k, self.i, self.j)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// cursor is at `(0, 0, 0)`
    NotStarted,
    InProgress,
    /// every `(k, i, j)` has been relaxed
    Complete,
}

///
/// Which leg of the path `i -> k -> j` has no known finite distance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingLeg {
    /// `i -> k`
    Head,
    /// `k -> j`
    Tail,
    Both,
}

///
/// Outcome of a single relaxation check of `(i, j)` via `k`.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Relaxation<W> {
    /// `distance[i][k]` or `distance[k][j]` is unreachable, so no sum was taken.
    Unreachable { missing: MissingLeg },
    /// `distance[i][k] + distance[k][j]` was not shorter than the current distance.
    Kept { current: W, candidate: W },
    /// The path through `k` was shorter and `distance[i][j]` was updated.
    Improved { old: W, new: W },
}

///
/// Report of one `step`: which cell was checked and what happened to it.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInfo<W> {
    pub cursor: Cursor,
    pub relaxation: Relaxation<W>,
}

impl<W> StepInfo<W> {
    /// distance matrix was modified by this step
    pub fn is_improved(&self) -> bool {
        matches!(self.relaxation, Relaxation::Improved { .. })
    }
}

impl<W: WeightLike> std::fmt::Display for StepInfo<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Cursor { k, i, j } = self.cursor;
        write!(f, "[{}] d({},{}) via {}: ", self.cursor, i, j, k)?;
        match self.relaxation {
            Relaxation::Unreachable { missing } => {
                let leg = match missing {
                    MissingLeg::Head => format!("{}->{}", i, k),
                    MissingLeg::Tail => format!("{}->{}", k, j),
                    MissingLeg::Both => format!("{}->{} and {}->{}", i, k, k, j),
                };
                write!(f, "skipped, no path {}", leg)
            }
            Relaxation::Kept { current, candidate } => write!(
                f,
                "kept {} (via {} is {})",
                DisplayWeight(current),
                k,
                DisplayWeight(candidate)
            ),
            Relaxation::Improved { old, new } => write!(
                f,
                "updated {} -> {}",
                DisplayWeight(old),
                DisplayWeight(new)
            ),
        }
    }
}

///
/// Floyd-Warshall whose progress is observable at the granularity of a
/// single `(k, i, j)` relaxation.
///
/// The engine is a plain synchronous state machine. Callers must not
/// interleave `step` calls on the same engine.
///
#[derive(Debug, Clone)]
pub struct FloydWarshallEngine<W> {
    distance: SquareMatrix<W>,
    cursor: Cursor,
    running: bool,
    steps_done: usize,
}

impl<W: WeightLike> FloydWarshallEngine<W> {
    pub fn new(graph: &GraphModel<W>) -> Self {
        FloydWarshallEngine {
            distance: graph.weights().clone(),
            cursor: Cursor::default(),
            running: false,
            steps_done: 0,
        }
    }
    ///
    /// Restart from scratch: copy the weights of `graph` (which may differ from
    /// the previous one) into the distance matrix and rewind the cursor.
    ///
    pub fn initialize(&mut self, graph: &GraphModel<W>) {
        *self = Self::new(graph);
    }
    ///
    /// Perform the relaxation check at the current cursor and advance it.
    ///
    /// Returns `false` (and clears the running flag) without doing anything
    /// if every `(k, i, j)` has already been processed.
    ///
    pub fn step(&mut self) -> bool {
        self.step_with_info().is_some()
    }
    ///
    /// Same transition as `step`, but returns the report of the performed
    /// relaxation check. `None` corresponds to `step() == false`.
    ///
    pub fn step_with_info(&mut self) -> Option<StepInfo<W>> {
        let n = self.vertex_count();
        if self.cursor.is_exhausted(n) {
            self.running = false;
            return None;
        }

        let cursor = self.cursor;
        let Cursor { k, i, j } = cursor;
        debug_assert!(i < n && j < n && k < n, "cursor {} out of range", cursor);

        let d_ik = self.distance[(i, k)];
        let d_kj = self.distance[(k, j)];
        let relaxation = match (d_ik.is_infinite(), d_kj.is_infinite()) {
            (true, true) => Relaxation::Unreachable {
                missing: MissingLeg::Both,
            },
            (true, false) => Relaxation::Unreachable {
                missing: MissingLeg::Head,
            },
            (false, true) => Relaxation::Unreachable {
                missing: MissingLeg::Tail,
            },
            (false, false) => {
                let current = self.distance[(i, j)];
                let candidate = d_ik + d_kj;
                if candidate < current {
                    self.distance[(i, j)] = candidate;
                    Relaxation::Improved {
                        old: current,
                        new: candidate,
                    }
                } else {
                    Relaxation::Kept { current, candidate }
                }
            }
        };
        let info = StepInfo { cursor, relaxation };
        if info.is_improved() {
            debug!("{}", info);
        } else {
            trace!("{}", info);
        }

        self.cursor = cursor.next(n);
        self.steps_done += 1;
        if self.cursor.is_exhausted(n) {
            info!("all {} relaxations done (n={})", self.total_steps(), n);
        }
        Some(info)
    }
    ///
    /// Call `step` until it returns false. Returns the number of performed relaxations.
    ///
    pub fn run_to_completion(&mut self) -> usize {
        let mut n_steps = 0;
        while self.step() {
            n_steps += 1;
        }
        n_steps
    }
    /// current distance matrix
    pub fn distances(&self) -> &SquareMatrix<W> {
        &self.distance
    }
    /// current `distance[i][j]`
    pub fn distance(&self, i: usize, j: usize) -> W {
        self.distance[(i, j)]
    }
    /// the relaxation which will be checked in the next `step`
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
    pub fn is_running(&self) -> bool {
        self.running
    }
    ///
    /// Rewind the cursor and clear the running flag.
    ///
    /// The distance matrix is left as it is; use `initialize` to restore the
    /// original weights.
    ///
    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
        self.running = false;
        self.steps_done = 0;
    }
    pub fn state(&self) -> EngineState {
        if self.cursor.is_exhausted(self.vertex_count()) {
            EngineState::Complete
        } else if self.cursor == Cursor::default() {
            EngineState::NotStarted
        } else {
            EngineState::InProgress
        }
    }
    pub fn vertex_count(&self) -> usize {
        self.distance.dim()
    }
    /// relaxations performed since the last `initialize` or `reset`
    pub fn steps_done(&self) -> usize {
        self.steps_done
    }
    /// `N^3`
    pub fn total_steps(&self) -> usize {
        self.vertex_count().pow(3)
    }
    pub fn remaining_steps(&self) -> usize {
        let n = self.vertex_count();
        self.total_steps() - self.cursor.rank(n).min(self.total_steps())
    }
    pub fn snapshot(&self) -> EngineSnapshot<W> {
        EngineSnapshot {
            cursor: self.cursor,
            state: self.state(),
            running: self.running,
            steps_done: self.steps_done,
            distances: self
                .distance
                .rows()
                .map(|row| row.iter().map(|&d| to_option(d)).collect())
                .collect(),
        }
    }
}

///
/// Serializable copy of the observable engine state.
/// Unreachable distances are `None` (`null` in json).
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot<W> {
    pub cursor: Cursor,
    pub state: EngineState,
    pub running: bool,
    pub steps_done: usize,
    pub distances: Vec<Vec<Option<W>>>,
}

//
// tests
//
