//!
//! globally-available parts
//!
pub use crate::driver::{Driver, DriverOutcome, StepObserver};
pub use crate::engine::{Cursor, EngineState, FloydWarshallEngine, Relaxation, StepInfo};
pub use crate::error::{InvalidGraphError, LoadError};
pub use crate::graph::GraphModel;
pub use crate::matrix::SquareMatrix;
pub use crate::weight::{WeightLike, INF};
