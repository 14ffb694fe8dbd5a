//!
//! State held by an interactive visualizer
//!
//! A `Session` owns the graph being shown together with the engine running on
//! it. Switching graphs replaces both at once, and the methods below
//! correspond to the controls of the visualizer (run / pause / new graph) and
//! to its animation timer callback (`tick`).
//!
use crate::engine::{FloydWarshallEngine, StepInfo};
use crate::graph::samples::{sample_graph, N_SAMPLES};
use crate::graph::GraphModel;
use log::info;

#[derive(Debug, Clone)]
pub struct Session {
    /// index of the sample graph being shown, `None` for a user supplied graph
    sample_index: Option<usize>,
    graph: GraphModel<i32>,
    engine: FloydWarshallEngine<i32>,
    last_step: Option<StepInfo<i32>>,
}

impl Session {
    /// session starting with the `index`-th sample graph
    pub fn from_sample(index: usize) -> Self {
        let index = index % N_SAMPLES;
        let mut session = Session::from_graph(sample_graph(index));
        session.sample_index = Some(index);
        session
    }
    pub fn from_graph(graph: GraphModel<i32>) -> Self {
        let engine = FloydWarshallEngine::new(&graph);
        Session {
            sample_index: None,
            graph,
            engine,
            last_step: None,
        }
    }
    pub fn graph(&self) -> &GraphModel<i32> {
        &self.graph
    }
    pub fn engine(&self) -> &FloydWarshallEngine<i32> {
        &self.engine
    }
    pub fn sample_index(&self) -> Option<usize> {
        self.sample_index
    }
    /// report of the latest relaxation performed by `tick`
    pub fn last_step(&self) -> Option<&StepInfo<i32>> {
        self.last_step.as_ref()
    }
    /// "Run" button
    pub fn run(&mut self) {
        self.engine.set_running(true);
    }
    /// "Pause" button
    pub fn pause(&mut self) {
        self.engine.set_running(false);
    }
    ///
    /// One firing of the animation timer.
    ///
    /// Steps the engine only while it is flagged as running. Returns whether
    /// the timer should keep firing.
    ///
    pub fn tick(&mut self) -> bool {
        if !self.engine.is_running() {
            return false;
        }
        match self.engine.step_with_info() {
            Some(info) => {
                self.last_step = Some(info);
                true
            }
            None => false,
        }
    }
    ///
    /// "New Graph" button: move on to the next sample graph with a fresh engine.
    ///
    pub fn next_graph(&mut self) {
        let index = self.sample_index.map_or(0, |i| (i + 1) % N_SAMPLES);
        info!("switching to sample graph #{}", index);
        *self = Session::from_sample(index);
    }
    /// replace the graph (and the engine) with an arbitrary graph
    pub fn load_graph(&mut self, graph: GraphModel<i32>) {
        *self = Session::from_graph(graph);
    }
    ///
    /// Edges `i -> k` and `k -> j` of the relaxation about to be checked,
    /// restricted to the edges existing in the original graph.
    /// Empty unless the engine is running.
    ///
    /// `has_edge` excludes self-loops and the sentinel. Since off-diagonal
    /// weights are positive, this is the same as "weight is finite and not 0".
    ///
    pub fn highlighted_edges(&self) -> Vec<(usize, usize)> {
        let n = self.graph.vertex_count();
        let c = self.engine.cursor();
        if !self.engine.is_running() || c.is_exhausted(n) {
            return Vec::new();
        }
        [(c.i, c.k), (c.k, c.j)]
            .into_iter()
            .filter(|&(a, b)| self.graph.has_edge(a, b))
            .collect()
    }
    /// current distance matrix as a text table
    pub fn cost_table(&self) -> String {
        self.engine.distances().display_with_inf().to_string()
    }
}

//
// tests
//
