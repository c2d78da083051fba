//! Rainbow color wheel
//!
//! Three linear segments over the 0-255 position range:
//! green to red, red to blue, blue back to green.

use crate::color::Rgb;

/// Get the rainbow color at a position of the wheel
pub const fn wheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb::new(pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb::new(255 - pos * 3, 0, pos * 3)
    } else {
        let pos = pos - 170;
        Rgb::new(0, pos * 3, 255 - pos * 3)
    }
}

/// Sample the wheel once per LED, spread evenly over the strip
///
/// LED `i` gets `wheel(i * (256 / count))`.
#[allow(clippy::cast_possible_truncation)]
pub fn rainbow(count: usize) -> Vec<Rgb> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = 256 / count;
    // i < count, so i * spacing stays below 256
    (0..count).map(|i| wheel((i * spacing) as u8)).collect()
}
