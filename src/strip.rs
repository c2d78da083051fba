//! Shared strip state
//!
//! The frame buffer and the sink live behind one lock. Every mutation that is
//! meant to be seen is followed by an `emit` inside the same critical
//! section, so a transmitted frame is never a mix of two writes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::color::Rgb;
use crate::error::EngineError;
use crate::frame::FrameBuffer;
use crate::sink::{DisplaySink, SinkError};

struct Surface {
    buffer: FrameBuffer,
    sink: Box<dyn DisplaySink>,
}

/// Frame buffer coupled with its display sink
pub struct Strip {
    led_count: usize,
    surface: Mutex<Surface>,
}

impl Strip {
    /// Create an all-black strip
    pub fn new(led_count: usize, sink: Box<dyn DisplaySink>) -> Self {
        Self {
            led_count,
            surface: Mutex::new(Surface {
                buffer: FrameBuffer::new(led_count),
                sink,
            }),
        }
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Consistent copy of the wire-order bytes
    pub fn snapshot(&self) -> Vec<u8> {
        self.lock().buffer.snapshot()
    }

    /// Color of one LED
    pub fn color(&self, index: usize) -> Result<Rgb, EngineError> {
        self.lock().buffer.get(index)
    }

    /// Set all LEDs without emitting
    pub fn write_all(&self, color: Rgb) {
        self.lock().buffer.write_all(color);
    }

    /// Set all LEDs from a per-LED array without emitting
    pub fn write_many(&self, colors: &[Rgb]) -> Result<(), EngineError> {
        self.lock().buffer.write_many(colors)
    }

    /// Mutate the buffer and emit the result under a single lock
    pub fn present<F>(&self, mutate: F) -> Result<(), SinkError>
    where
        F: FnOnce(&mut FrameBuffer),
    {
        let mut surface = self.lock();
        let Surface { buffer, sink } = &mut *surface;
        mutate(buffer);
        sink.emit(buffer.as_bytes())
    }

    /// A panic while the lock was held leaves the bytes valid, so the
    /// poison flag is ignored.
    fn lock(&self) -> MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
