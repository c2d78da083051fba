//! Error kinds shared by the engine, the strip and the command facade.

use std::io;

use thiserror::Error;

use crate::sink::SinkError;

/// Errors returned by the animation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// LED index outside `0..len`
    #[error("LED index {index} is out of range for a strip of {len} LEDs")]
    IndexOutOfRange { index: usize, len: usize },
    /// A per-LED color array does not match the strip length
    #[error("expected {expected} colors, got {actual}")]
    ColorCountMismatch { expected: usize, actual: usize },
    /// Duration that would produce a negative (or undefined) step count
    #[error("duration {0}s does not yield a valid step count")]
    InvalidStepCount(f64),
    /// Negative or non-finite pause
    #[error("invalid pause duration {0}s")]
    InvalidDuration(f64),
    /// The worker is not running
    #[error("animation engine is not running")]
    EngineNotRunning,
    /// A waited-for task was dropped by `stop()` before it ran
    #[error("task was discarded before it could run")]
    TaskDiscarded,
    /// The display sink failed to emit a frame
    #[error("transport failure: {0}")]
    Transport(#[from] SinkError),
    /// The worker thread could not be spawned
    #[error("failed to spawn animation worker: {0}")]
    Spawn(#[source] io::Error),
    /// The worker thread died outside of a task
    #[error("animation worker panicked")]
    WorkerPanicked,
}
