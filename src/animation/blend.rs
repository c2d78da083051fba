//! Linear blend between two byte sequences
//!
//! Each channel moves by a fixed floating-point increment per step. Step `t`
//! shows `start + trunc(increment * t)`; after the last step the exact
//! target is assigned to cancel the truncation drift.

/// Precomputed blend from a start to a target
#[derive(Debug, Clone)]
pub struct Blend {
    start: Vec<u8>,
    target: Vec<u8>,
    increment: Vec<f64>,
    steps: u32,
}

impl Blend {
    /// Both slices must have the same length
    pub fn new(start: &[u8], target: &[u8], steps: u32) -> Self {
        debug_assert_eq!(start.len(), target.len());
        let increment = if steps == 0 {
            vec![0.0; start.len()]
        } else {
            let steps = f64::from(steps);
            start
                .iter()
                .zip(target)
                .map(|(&s, &t)| (f64::from(t) - f64::from(s)) / steps)
                .collect()
        };
        Self {
            start: start.to_vec(),
            target: target.to_vec(),
            increment,
            steps,
        }
    }

    /// Number of intermediate frames
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Write the values of step `t` into `out`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_into(&self, t: u32, out: &mut [u8]) {
        let t = f64::from(t);
        for ((value, &start), &increment) in out.iter_mut().zip(&self.start).zip(&self.increment) {
            let offset = (increment * t) as i32;
            *value = (i32::from(start) + offset).clamp(0, 255) as u8;
        }
    }

    /// Values of step `t`
    pub fn step(&self, t: u32) -> Vec<u8> {
        let mut out = vec![0; self.start.len()];
        self.step_into(t, &mut out);
        out
    }

    /// Write the exact target into `out`
    pub fn finish_into(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.target);
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }
}
