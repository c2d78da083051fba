//! Frame buffer
//!
//! Fixed-length array of LED slots stored in wire order. The length is set at
//! construction and never changes, so every access past the end is a caller
//! error rather than a resize.

use crate::color::{Rgb, from_wire, to_wire};
use crate::error::EngineError;

/// Bytes per LED slot
pub const CHANNELS: usize = 3;

/// Wire-order color bytes for a whole strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create an all-black buffer for `led_count` LEDs
    pub fn new(led_count: usize) -> Self {
        Self {
            data: vec![0; led_count * CHANNELS],
        }
    }

    /// Number of LEDs
    pub fn led_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Raw wire-order bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes. The length stays fixed.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copy of the current bytes
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Wire-order bytes of one LED
    pub fn slot(&self, index: usize) -> Result<&[u8], EngineError> {
        let range = self.range(index)?;
        Ok(&self.data[range])
    }

    /// Mutable wire-order bytes of one LED
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut [u8], EngineError> {
        let range = self.range(index)?;
        Ok(&mut self.data[range])
    }

    /// Color of one LED
    pub fn get(&self, index: usize) -> Result<Rgb, EngineError> {
        let slot = self.slot(index)?;
        Ok(from_wire([slot[0], slot[1], slot[2]]))
    }

    /// Set one LED
    pub fn write_one(&mut self, index: usize, color: Rgb) -> Result<(), EngineError> {
        self.slot_mut(index)?.copy_from_slice(&to_wire(color));
        Ok(())
    }

    /// Set every LED to the same color
    pub fn write_all(&mut self, color: Rgb) {
        let wire = to_wire(color);
        for slot in self.data.chunks_exact_mut(CHANNELS) {
            slot.copy_from_slice(&wire);
        }
    }

    /// Set every LED from a per-LED color array of exactly `led_count` entries
    pub fn write_many(&mut self, colors: &[Rgb]) -> Result<(), EngineError> {
        self.check_len(colors.len())?;
        for (slot, &color) in self.data.chunks_exact_mut(CHANNELS).zip(colors) {
            slot.copy_from_slice(&to_wire(color));
        }
        Ok(())
    }

    /// Set the first `colors.len()` LEDs, leaving the rest untouched
    pub fn write_head(&mut self, colors: &[Rgb]) -> Result<(), EngineError> {
        let expected = self.led_count();
        if colors.len() > expected {
            return Err(EngineError::ColorCountMismatch {
                expected,
                actual: colors.len(),
            });
        }
        for (slot, &color) in self.data.chunks_exact_mut(CHANNELS).zip(colors) {
            slot.copy_from_slice(&to_wire(color));
        }
        Ok(())
    }

    /// Shift every LED one position towards the start; the first LED wraps
    /// around to the end.
    pub fn rotate_left(&mut self) {
        if !self.data.is_empty() {
            self.data.rotate_left(CHANNELS);
        }
    }

    /// Check that a per-LED array matches this strip
    pub fn check_len(&self, actual: usize) -> Result<(), EngineError> {
        let expected = self.led_count();
        if actual == expected {
            Ok(())
        } else {
            Err(EngineError::ColorCountMismatch { expected, actual })
        }
    }

    fn range(&self, index: usize) -> Result<core::ops::Range<usize>, EngineError> {
        let len = self.led_count();
        if index >= len {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        let start = index * CHANNELS;
        Ok(start..start + CHANNELS)
    }
}

/// Convert a per-LED color array into wire-order bytes
pub fn wire_bytes(colors: &[Rgb]) -> Vec<u8> {
    colors.iter().flat_map(|&color| to_wire(color)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left_wraps_first_led() {
        let mut frame = FrameBuffer::new(3);
        frame.write_one(0, Rgb::new(1, 2, 3)).unwrap();
        frame.write_one(1, Rgb::new(4, 5, 6)).unwrap();
        frame.rotate_left();
        assert_eq!(frame.get(0).unwrap(), Rgb::new(4, 5, 6));
        assert_eq!(frame.get(1).unwrap(), Rgb::default());
        assert_eq!(frame.get(2).unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_empty_frame_rotates() {
        let mut frame = FrameBuffer::new(0);
        frame.rotate_left();
        assert!(frame.as_bytes().is_empty());
    }
}
