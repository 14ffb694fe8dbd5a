//!
//! Subcommands of the `fwstep` binary
//!
use crate::driver::{Driver, DriverOutcome, StepObserver};
use crate::engine::{FloydWarshallEngine, StepInfo};
use crate::error::{InvalidGraphError, LoadError};
use crate::graph::random::random_graph;
use crate::graph::samples::{sample_graph, N_SAMPLES};
use crate::graph::GraphModel;
use crate::reference::{all_pairs_shortest_paths, mismatches};
use crate::utils::timer_us;
use log::{info, warn};
use std::ops::ControlFlow;
use std::path::PathBuf;

///
/// Where the graph comes from
///
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// one of the predefined graphs
    Sample(usize),
    /// random graph with `n` vertices
    Random { n: usize, seed: u64 },
    /// json file `{"weights": [[0, 5, null], ...]}`
    Json(PathBuf),
}

pub fn load_graph(source: &GraphSource) -> Result<GraphModel<i32>, LoadError> {
    let graph = match source {
        GraphSource::Sample(index) => sample_graph(*index),
        GraphSource::Random { n, seed } => {
            if *n == 0 {
                return Err(InvalidGraphError::Empty.into());
            }
            random_graph(*n, *seed)
        }
        GraphSource::Json(path) => GraphModel::from_json_file(path)?,
    };
    info!(
        "loaded {:?}: n_vertices={} n_edges={}",
        source,
        graph.vertex_count(),
        graph.n_edges()
    );
    Ok(graph)
}

///
/// Print every predefined graph
///
pub fn list_samples() {
    for index in 0..N_SAMPLES {
        let g = sample_graph(index);
        println!(
            "# sample {} (n_vertices={} n_edges={})",
            index,
            g.vertex_count(),
            g.n_edges()
        );
        print!("{}", g.weights().display_with_inf());
        println!("{}", g.to_json_string());
    }
}

///
/// Observer printing the progress to stdout.
///
#[derive(Debug, Clone, Default)]
pub struct TerminalObserver {
    /// print only relaxations that changed the matrix
    pub quiet: bool,
    /// print engine snapshots as json lines instead of tables
    pub json_output: bool,
}

impl StepObserver<i32> for TerminalObserver {
    fn on_step(&mut self, engine: &FloydWarshallEngine<i32>, info: &StepInfo<i32>) -> ControlFlow<()> {
        if self.quiet && !info.is_improved() {
            return ControlFlow::Continue(());
        }
        if self.json_output {
            match serde_json::to_string(&engine.snapshot()) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("cannot serialize snapshot: {}", e),
            }
        } else {
            println!("{} ({}/{})", info, engine.steps_done(), engine.total_steps());
            print!("{}", engine.distances().display_with_inf());
        }
        ControlFlow::Continue(())
    }
    fn on_complete(&mut self, engine: &FloydWarshallEngine<i32>) {
        if !self.json_output {
            println!("# final answer: smallest calculated path matrix");
            print!("{}", engine.distances().display_with_inf());
        }
    }
}

///
/// Animate the relaxations on `graph` at the cadence of `driver`.
/// Returns whether the final matrix agrees with the reference solver (if `verify`).
///
pub fn animate(
    graph: &GraphModel<i32>,
    driver: &Driver,
    observer: &mut TerminalObserver,
    verify: bool,
) -> bool {
    let mut engine = FloydWarshallEngine::new(graph);
    if !observer.json_output {
        println!("# initial cost table");
        print!("{}", engine.distances().display_with_inf());
    }
    let outcome = driver.run(&mut engine, observer);
    info!("outcome={:?} steps={}", outcome, engine.steps_done());
    if outcome == DriverOutcome::Completed && verify {
        verify_against_reference(graph, &engine)
    } else {
        true
    }
}

///
/// Run to the end without pacing and print the result.
///
pub fn solve(graph: &GraphModel<i32>, json_output: bool, verify: bool) -> bool {
    let mut engine = FloydWarshallEngine::new(graph);
    let (n_steps, us) = timer_us(|| engine.run_to_completion());
    info!("{} steps in {}us", n_steps, us);
    if json_output {
        match serde_json::to_string(&engine.snapshot()) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("cannot serialize snapshot: {}", e),
        }
    } else {
        print!("{}", engine.distances().display_with_inf());
    }
    if verify {
        verify_against_reference(graph, &engine)
    } else {
        true
    }
}

fn verify_against_reference(graph: &GraphModel<i32>, engine: &FloydWarshallEngine<i32>) -> bool {
    let expected = all_pairs_shortest_paths(graph);
    let diff = mismatches(engine.distances(), &expected);
    for (i, j, got, want) in diff.iter() {
        warn!("mismatch at ({}, {}): engine={} reference={}", i, j, got, want);
    }
    if diff.is_empty() {
        info!("verified against reference solver");
    }
    diff.is_empty()
}

//
// tests
//
