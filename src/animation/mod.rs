//! Animation algorithms
//!
//! Every frame is produced by locking the strip, mutating the buffer and
//! emitting it in one go; the worker then sleeps for the frame delay with
//! the lock released. A failed emit is logged and the animation carries on
//! with its next frame.

mod blend;

use embassy_time::Duration;
use log::warn;

pub use blend::Blend;

use crate::color::to_wire;
use crate::frame::{FrameBuffer, wire_bytes};
use crate::operation::Animation;
use crate::pacing::sleep;
use crate::strip::Strip;

/// Runs animations against a strip
pub struct Player<'a> {
    strip: &'a Strip,
    delay: Duration,
}

impl<'a> Player<'a> {
    pub const fn new(strip: &'a Strip, delay: Duration) -> Self {
        Self { strip, delay }
    }

    /// Run an animation to completion
    ///
    /// Animations are validated before they are queued; an index that is out
    /// of range here leaves the buffer untouched.
    pub fn play(&self, animation: &Animation) {
        match animation {
            Animation::SetOne { index, color } => {
                let (index, color) = (*index, *color);
                self.frame(|buffer| {
                    if let Err(err) = buffer.write_one(index, color) {
                        warn!("skipping set: {err}");
                    }
                });
            }
            Animation::SetAll { color } => {
                let color = *color;
                self.frame(|buffer| buffer.write_all(color));
            }
            Animation::BlendAll { color, steps } => {
                let start = self.strip.snapshot();
                let target: Vec<u8> = (0..self.strip.led_count())
                    .flat_map(|_| to_wire(*color))
                    .collect();
                self.blend(&Blend::new(&start, &target, *steps), None);
            }
            Animation::BlendRgb { colors, steps } => {
                let start = self.strip.snapshot();
                if colors.len() != self.strip.led_count() {
                    warn!(
                        "skipping blend: {} colors for {} LEDs",
                        colors.len(),
                        self.strip.led_count()
                    );
                    return;
                }
                self.blend(&Blend::new(&start, &wire_bytes(colors), *steps), None);
            }
            Animation::BlendOne {
                index,
                color,
                steps,
            } => {
                let start = match self.strip.color(*index).map(to_wire) {
                    Ok(start) => start,
                    Err(err) => {
                        warn!("skipping blend: {err}");
                        return;
                    }
                };
                self.blend(&Blend::new(&start, &to_wire(*color), *steps), Some(*index));
            }
            Animation::Spin { steps } => {
                for _ in 0..*steps {
                    self.frame(FrameBuffer::rotate_left);
                    sleep(self.delay);
                }
            }
            Animation::Pause(duration) => sleep(*duration),
            Animation::Frames(frames) => {
                for colors in frames {
                    self.frame(|buffer| {
                        if let Err(err) = buffer.write_head(colors) {
                            warn!("skipping frame: {err}");
                        }
                    });
                    sleep(self.delay);
                }
            }
        }
    }

    /// Run the intermediate steps, then force the exact target
    ///
    /// `slot` limits the blend to a single LED.
    fn blend(&self, blend: &Blend, slot: Option<usize>) {
        for t in 0..blend.steps() {
            self.frame(|buffer| {
                if let Some(bytes) = region(buffer, slot) {
                    blend.step_into(t, bytes);
                }
            });
            sleep(self.delay);
        }

        self.frame(|buffer| {
            if let Some(bytes) = region(buffer, slot) {
                blend.finish_into(bytes);
            }
        });
    }

    /// Mutate and emit one frame
    fn frame<F>(&self, mutate: F)
    where
        F: FnOnce(&mut FrameBuffer),
    {
        if let Err(err) = self.strip.present(mutate) {
            warn!("failed to emit frame: {err}");
        }
    }
}

fn region(buffer: &mut FrameBuffer, slot: Option<usize>) -> Option<&mut [u8]> {
    match slot {
        Some(index) => buffer.slot_mut(index).ok(),
        None => Some(buffer.as_bytes_mut()),
    }
}
