use embassy_time::Duration;

use crate::color::Rgb;
use crate::error::EngineError;
use crate::pacing::DEFAULT_FRAME_PERIOD;

/// Animations the worker can run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animation {
    /// Set one LED and emit once
    SetOne { index: usize, color: Rgb },
    /// Set every LED and emit once
    SetAll { color: Rgb },
    /// Blend every LED towards one color
    BlendAll { color: Rgb, steps: u32 },
    /// Blend each LED towards its own color
    BlendRgb { colors: Vec<Rgb>, steps: u32 },
    /// Blend a single LED, leaving the others untouched
    BlendOne { index: usize, color: Rgb, steps: u32 },
    /// Rotate the strip by one LED per step
    Spin { steps: u32 },
    /// Hold the worker without touching the buffer
    Pause(Duration),
    /// Play precomputed frames, one per delay. Each frame sets LEDs from
    /// the start of the strip and may be shorter than it.
    Frames(Vec<Vec<Rgb>>),
}

impl Animation {
    /// Short name for diagnostics
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetOne { .. } => "set_one",
            Self::SetAll { .. } => "set_all",
            Self::BlendAll { .. } => "blend_all",
            Self::BlendRgb { .. } => "blend_rgb",
            Self::BlendOne { .. } => "blend_one",
            Self::Spin { .. } => "spin",
            Self::Pause(_) => "pause",
            Self::Frames(_) => "frames",
        }
    }

    /// Check the animation against a strip of `led_count` LEDs
    pub fn validate(&self, led_count: usize) -> Result<(), EngineError> {
        match self {
            Self::SetOne { index, .. } | Self::BlendOne { index, .. } if *index >= led_count => {
                Err(EngineError::IndexOutOfRange {
                    index: *index,
                    len: led_count,
                })
            }
            Self::BlendRgb { colors, .. } if colors.len() != led_count => {
                Err(EngineError::ColorCountMismatch {
                    expected: led_count,
                    actual: colors.len(),
                })
            }
            Self::Frames(frames) => match frames.iter().find(|frame| frame.len() > led_count) {
                Some(frame) => Err(EngineError::ColorCountMismatch {
                    expected: led_count,
                    actual: frame.len(),
                }),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

/// A queued animation with its frame delay
///
/// With `wait` set, the submitter blocks until the worker has finished this
/// task. The worker itself always runs a task to completion before taking
/// the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub animation: Animation,
    pub delay: Duration,
    pub wait: bool,
}

impl Task {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            delay: DEFAULT_FRAME_PERIOD,
            wait: false,
        }
    }

    /// Set the pause between animation frames
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Block the submitter until the task has run
    #[must_use]
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

impl From<Animation> for Task {
    fn from(animation: Animation) -> Self {
        Self::new(animation)
    }
}
