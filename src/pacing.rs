//! Frame pacing
//!
//! Blending animations advance in fixed frame periods. Durations requested
//! by a script are turned into a whole number of frames here, and the worker
//! sleeps through this module between frames.

use embassy_time::Duration;

use crate::error::EngineError;

/// Default frame period (20 FPS).
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(50);

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Number of blend steps that fit into `seconds`
///
/// Truncates toward zero, so any duration shorter than one frame yields zero
/// steps (an immediate change).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn steps_for(seconds: f64, frame_period: Duration) -> Result<u32, EngineError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(EngineError::InvalidStepCount(seconds));
    }
    let period = frame_period.as_micros();
    if period == 0 {
        return Ok(0);
    }
    // Round to whole microseconds first so that 1.0s / 50ms is exactly 20
    let micros = (seconds * MICROS_PER_SECOND).round() as u64;
    Ok(u32::try_from(micros / period).unwrap_or(u32::MAX))
}

/// Convert seconds into a pause duration
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seconds(seconds: f64) -> Result<Duration, EngineError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(EngineError::InvalidDuration(seconds));
    }
    Ok(Duration::from_micros((seconds * MICROS_PER_SECOND).round() as u64))
}

/// Block the calling thread
pub fn sleep(duration: Duration) {
    let micros = duration.as_micros();
    if micros > 0 {
        std::thread::sleep(std::time::Duration::from_micros(micros));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_for_default_period() {
        assert_eq!(steps_for(1.0, DEFAULT_FRAME_PERIOD).unwrap(), 20);
        assert_eq!(steps_for(0.0, DEFAULT_FRAME_PERIOD).unwrap(), 0);
        assert_eq!(steps_for(0.12, DEFAULT_FRAME_PERIOD).unwrap(), 2);
        assert_eq!(steps_for(0.049, DEFAULT_FRAME_PERIOD).unwrap(), 0);
    }

    #[test]
    fn test_steps_for_rejects_negative() {
        assert!(matches!(
            steps_for(-1.0, DEFAULT_FRAME_PERIOD),
            Err(EngineError::InvalidStepCount(_))
        ));
        assert!(steps_for(f64::NAN, DEFAULT_FRAME_PERIOD).is_err());
    }

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(0.075).unwrap(), Duration::from_millis(75));
        assert!(matches!(seconds(-0.5), Err(EngineError::InvalidDuration(_))));
    }
}
