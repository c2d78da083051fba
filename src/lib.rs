//! Queued LED strip animation engine.
//!
//! Commands from any number of threads are turned into animation tasks and
//! played one at a time by a single worker, which writes every frame to a
//! display sink.

pub mod animation;
pub mod color;
pub mod command;
pub mod engine;
pub mod error;
pub mod frame;
pub mod gamepad;
pub mod operation;
pub mod pacing;
mod queue;
pub mod sample;
pub mod script;
pub mod sink;
pub mod strip;

pub use command::Commands;
pub use engine::{Engine, EngineConfig};
pub use error::EngineError;
pub use frame::FrameBuffer;
pub use operation::{Animation, Task};
pub use script::{Interpreter, ScriptError};
pub use sink::{DisplaySink, Recorder, SinkConfig, SinkError};
pub use strip::Strip;

pub use color::{NamedColor, Rgb};
pub use embassy_time::Duration;
