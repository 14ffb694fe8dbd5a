//!
//! Interval driver which repeatedly steps an engine
//!
//! The engine itself never sleeps. This driver owns the cadence: it calls
//! `step_with_info` every `interval` while the engine is flagged as running,
//! and stops itself as soon as the engine reports that no work remains.
//!
use crate::engine::{FloydWarshallEngine, StepInfo};
use crate::weight::WeightLike;
use log::{debug, info};
use std::ops::ControlFlow;
use std::time::Duration;

/// default cadence of the original visualizer
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

///
/// Consumer of the engine state, notified after each step.
///
pub trait StepObserver<W> {
    /// Called after every performed relaxation. Returning `Break` pauses the run.
    fn on_step(&mut self, engine: &FloydWarshallEngine<W>, info: &StepInfo<W>) -> ControlFlow<()>;
    /// Called once when the engine reports that all relaxations are done.
    fn on_complete(&mut self, _engine: &FloydWarshallEngine<W>) {}
}

///
/// Observer that ignores everything.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl<W> StepObserver<W> for NullObserver {
    fn on_step(&mut self, _: &FloydWarshallEngine<W>, _: &StepInfo<W>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

///
/// Observer collecting every step report.
///
#[derive(Debug, Clone, Default)]
pub struct StepRecorder<W> {
    pub steps: Vec<StepInfo<W>>,
    pub completed: bool,
}

impl<W: Copy> StepObserver<W> for StepRecorder<W> {
    fn on_step(&mut self, _: &FloydWarshallEngine<W>, info: &StepInfo<W>) -> ControlFlow<()> {
        self.steps.push(*info);
        ControlFlow::Continue(())
    }
    fn on_complete(&mut self, _: &FloydWarshallEngine<W>) {
        self.completed = true;
    }
}

/// Why `Driver::run` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOutcome {
    /// `step` returned false
    Completed,
    /// the observer or someone else cleared the running flag
    Paused,
    /// `max_steps` relaxations were performed in this run
    StepLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    /// pause between two steps
    pub interval: Duration,
    /// stop after this number of steps in a single `run`
    pub max_steps: Option<usize>,
}

impl Default for Driver {
    fn default() -> Self {
        Driver {
            interval: DEFAULT_INTERVAL,
            max_steps: None,
        }
    }
}

impl Driver {
    pub fn new(interval: Duration) -> Self {
        Driver {
            interval,
            max_steps: None,
        }
    }
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Driver {
            max_steps: Some(max_steps),
            ..self
        }
    }
    ///
    /// Mark the engine as running and step it until it completes, is paused,
    /// or `max_steps` is reached. The running flag is cleared on return
    /// unless the run was stopped by the step limit.
    ///
    pub fn run<W, O>(&self, engine: &mut FloydWarshallEngine<W>, observer: &mut O) -> DriverOutcome
    where
        W: WeightLike,
        O: StepObserver<W>,
    {
        engine.set_running(true);
        let mut n_steps = 0;
        let outcome = loop {
            if !engine.is_running() {
                break DriverOutcome::Paused;
            }
            if self.max_steps.map_or(false, |m| n_steps >= m) {
                break DriverOutcome::StepLimit;
            }
            match engine.step_with_info() {
                Some(info) => {
                    n_steps += 1;
                    if observer.on_step(engine, &info).is_break() {
                        engine.set_running(false);
                    } else if !self.interval.is_zero() {
                        std::thread::sleep(self.interval);
                    }
                }
                None => {
                    observer.on_complete(engine);
                    break DriverOutcome::Completed;
                }
            }
        };
        debug!("driver stopped: {:?} after {} steps", outcome, n_steps);
        if outcome == DriverOutcome::Completed {
            info!("run completed, {} steps in total", engine.steps_done());
        }
        outcome
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Cursor, EngineState};
    use crate::graph::samples::sample_graph;
    use crate::graph::GraphModel;
    use crate::utils::timer;

    fn fast() -> Driver {
        Driver::new(Duration::ZERO)
    }

    #[test]
    fn runs_to_completion() {
        let g = sample_graph(0);
        let mut e = FloydWarshallEngine::new(&g);
        let mut r = StepRecorder::default();
        assert_eq!(fast().run(&mut e, &mut r), DriverOutcome::Completed);
        assert_eq!(r.steps.len(), 64);
        assert!(r.completed);
        assert!(!e.is_running());
        assert_eq!(e.state(), EngineState::Complete);

        // already complete: stops immediately
        let mut r = StepRecorder::default();
        assert_eq!(fast().run(&mut e, &mut r), DriverOutcome::Completed);
        assert!(r.steps.is_empty());
    }

    struct PauseAt(usize);

    impl StepObserver<i32> for PauseAt {
        fn on_step(&mut self, engine: &FloydWarshallEngine<i32>, _: &StepInfo<i32>) -> ControlFlow<()> {
            if engine.steps_done() >= self.0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    #[test]
    fn observer_pauses_and_run_resumes() {
        let g = sample_graph(0);
        let mut e = FloydWarshallEngine::new(&g);
        assert_eq!(fast().run(&mut e, &mut PauseAt(10)), DriverOutcome::Paused);
        assert!(!e.is_running());
        assert_eq!(e.steps_done(), 10);
        assert_eq!(e.cursor(), Cursor::new(0, 2, 2));

        assert_eq!(fast().run(&mut e, &mut NullObserver), DriverOutcome::Completed);
        assert_eq!(e.steps_done(), 64);
    }

    #[test]
    fn step_limit() {
        let g = sample_graph(2);
        let mut e = FloydWarshallEngine::new(&g);
        let d = fast().with_max_steps(7);
        assert_eq!(d.run(&mut e, &mut NullObserver), DriverOutcome::StepLimit);
        assert!(e.is_running());
        assert_eq!(e.steps_done(), 7);
        assert_eq!(d.run(&mut e, &mut NullObserver), DriverOutcome::StepLimit);
        assert_eq!(e.steps_done(), 14);
    }

    #[test]
    fn recorded_cursors_are_in_order() {
        let g = sample_graph(5);
        let mut e = FloydWarshallEngine::new(&g);
        let mut r = StepRecorder::default();
        fast().run(&mut e, &mut r);
        let cursors: Vec<Cursor> = r.steps.iter().map(|s| s.cursor).collect();
        assert_eq!(cursors.len(), 125);
        assert!(cursors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sleeps_between_steps() {
        let g = GraphModel::from_rows(vec![vec![0]]).unwrap();
        let mut e = FloydWarshallEngine::new(&g);
        let d = Driver::new(Duration::from_millis(5));
        let (outcome, ms) = timer(|| d.run(&mut e, &mut NullObserver));
        assert_eq!(outcome, DriverOutcome::Completed);
        assert!(ms >= 5);
    }
}
