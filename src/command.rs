//! Command facade
//!
//! Named, script-friendly operations translated into animation tasks.
//! Durations are given in seconds and turned into a number of frames with
//! the engine's frame period; a zero duration becomes an instant change.
//! Every command is queued, so commands issued from one thread take effect
//! in the order they were issued.

use std::sync::Arc;

use crate::color::{BLACK, NamedColor, Rgb, WHITE, rainbow};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::operation::Animation;
use crate::pacing::{seconds, steps_for};

/// Default on/off time of one strobe flash, in seconds
pub const DEFAULT_STROBE_TIME: f64 = 0.075;

/// Default strobe color
pub const DEFAULT_STROBE_COLOR: Rgb = WHITE;

/// Default duration of a blend, in seconds
pub const DEFAULT_BLEND_TIME: f64 = 1.0;

/// High level commands on top of an [`Engine`]
#[derive(Clone)]
pub struct Commands {
    engine: Arc<Engine>,
}

impl Commands {
    pub const fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Start the animation worker
    pub fn start(&self) -> Result<(), EngineError> {
        self.engine.start()
    }

    /// Stop the animation worker, discarding queued commands
    pub fn stop(&self) -> Result<(), EngineError> {
        self.engine.stop()
    }

    /// Move all LEDs, or only LED `index`, to `color` over `time` seconds
    pub fn rgb(&self, color: Rgb, index: Option<usize>, time: f64) -> Result<(), EngineError> {
        let steps = self.steps(time)?;
        let animation = match (index, steps) {
            (Some(index), 0) => Animation::SetOne { index, color },
            (Some(index), steps) => Animation::BlendOne {
                index,
                color,
                steps,
            },
            (None, 0) => Animation::SetAll { color },
            (None, steps) => Animation::BlendAll { color, steps },
        };
        self.engine.submit(animation)
    }

    /// Move to a named color, using its command value
    pub fn set_color(
        &self,
        name: NamedColor,
        index: Option<usize>,
        time: f64,
    ) -> Result<(), EngineError> {
        self.rgb(name.command_rgb(), index, time)
    }

    /// Blend each LED to its own named color
    ///
    /// `names` must hold exactly one color per LED.
    pub fn blend(&self, names: &[NamedColor], time: f64) -> Result<(), EngineError> {
        let colors = names.iter().map(|name| name.rgb()).collect();
        self.blend_rgb(colors, time)
    }

    /// Blend each LED to its own color
    pub fn blend_rgb(&self, colors: Vec<Rgb>, time: f64) -> Result<(), EngineError> {
        let steps = self.steps(time)?;
        self.engine.submit(Animation::BlendRgb { colors, steps })
    }

    /// Blend to a rainbow spread over the strip
    pub fn rainbow(&self, time: f64) -> Result<(), EngineError> {
        self.blend_rgb(rainbow(self.engine.led_count()), time)
    }

    /// Rotate the strip one LED per frame for `time` seconds
    pub fn spinner(&self, time: f64) -> Result<(), EngineError> {
        let steps = self.steps(time)?;
        self.engine.submit(Animation::Spin { steps })
    }

    /// Flash `color` on and off `cycles` times, `time` seconds per phase
    pub fn strobe(&self, cycles: u32, time: f64, color: Rgb) -> Result<(), EngineError> {
        let pause = seconds(time)?;
        for _ in 0..cycles {
            self.engine.submit(Animation::SetAll { color })?;
            self.engine.submit(Animation::Pause(pause))?;
            self.engine.submit(Animation::SetAll { color: BLACK })?;
            self.engine.submit(Animation::Pause(pause))?;
        }
        Ok(())
    }

    /// Play frames one per frame period, e.g. the columns of an image sample
    pub fn frames(&self, frames: Vec<Vec<Rgb>>) -> Result<(), EngineError> {
        self.engine.submit(Animation::Frames(frames))
    }

    /// Hold the queue for `time` seconds
    pub fn pause(&self, time: f64) -> Result<(), EngineError> {
        let pause = seconds(time)?;
        self.engine.submit(Animation::Pause(pause))
    }

    /// Block until all commands issued so far have been played
    pub fn flush(&self) -> Result<(), EngineError> {
        self.engine.flush()
    }

    fn steps(&self, time: f64) -> Result<u32, EngineError> {
        steps_for(time, self.engine.frame_period())
    }
}
