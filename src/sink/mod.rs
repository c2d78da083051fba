//! Display sinks
//!
//! A sink receives complete frames in wire order and pushes them to a
//! device. Sinks are opened once at startup and owned by the strip, which
//! serializes every `emit` with buffer writes.

mod http;
mod spi;

use core::str::FromStr;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

pub use http::HttpSink;
pub use spi::SpiSink;

/// Default network endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default hardware bus device
pub const DEFAULT_SPI_DEVICE: &str = "/dev/spidev0.0";

/// Default bus clock, 1 MHz
pub const DEFAULT_SPI_SPEED_HZ: u32 = 1_000_000;

const SPI_PREFIX: &str = "spi:";
const MEMORY_SINK: &str = "memory";

/// Errors raised while emitting a frame
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("http request failed: {0}")]
    Http(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0} sink is not supported by this build")]
    Unsupported(&'static str),
    #[error("invalid sink configuration: {0}")]
    InvalidConfig(String),
}

/// Frame output
///
/// Implement this trait to support other transports.
pub trait DisplaySink: Send {
    /// Send a full frame of wire-order bytes
    fn emit(&mut self, frame: &[u8]) -> Result<(), SinkError>;
}

/// Sink selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    /// Post frames as JSON to `{base_url}/pixels/raw`
    Http { base_url: String, bgr: bool },
    /// Write frames to a bus device
    Spi { device: String, speed_hz: u32 },
    /// Keep frames in memory
    Recorder,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::Http {
            base_url: DEFAULT_BASE_URL.to_owned(),
            bgr: true,
        }
    }
}

impl SinkConfig {
    /// Open the configured transport
    pub fn open(&self) -> Result<Box<dyn DisplaySink>, SinkError> {
        Ok(match self {
            Self::Http { base_url, bgr } => Box::new(HttpSink::new(base_url, *bgr)),
            Self::Spi { device, speed_hz } => Box::new(SpiSink::open(device, *speed_hz)?),
            Self::Recorder => Box::new(Recorder::new()),
        })
    }
}

impl FromStr for SinkConfig {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(MEMORY_SINK) {
            return Ok(Self::Recorder);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Self::Http {
                base_url: s.trim_end_matches('/').to_owned(),
                bgr: true,
            });
        }
        let Some(spec) = s.strip_prefix(SPI_PREFIX) else {
            return Err(SinkError::InvalidConfig(s.to_owned()));
        };
        let (device, speed_hz) = match spec.split_once('@') {
            Some((device, speed)) => {
                let speed_hz = speed
                    .parse()
                    .map_err(|_| SinkError::InvalidConfig(s.to_owned()))?;
                (device, speed_hz)
            }
            None => (spec, DEFAULT_SPI_SPEED_HZ),
        };
        let device = if device.is_empty() {
            DEFAULT_SPI_DEVICE
        } else {
            device
        };
        Ok(Self::Spi {
            device: device.to_owned(),
            speed_hz,
        })
    }
}

/// In-memory sink that keeps every emitted frame
///
/// Clones share the same frame log, so a clone can be handed to the engine
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    frames: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames emitted so far
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent frame
    pub fn last(&self) -> Option<Vec<u8>> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Forget recorded frames
    pub fn clear(&self) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DisplaySink for Recorder {
    fn emit(&mut self, frame: &[u8]) -> Result<(), SinkError> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame.to_vec());
        Ok(())
    }
}
