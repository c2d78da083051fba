//! Image samples
//!
//! An image is played column by column: column `x` becomes frame `x` and
//! pixel `(x, y)` lights LED `y`. Rows below the end of the strip are cut
//! off.

use std::path::Path;

use image::{ImageError, RgbImage};
use log::debug;

use crate::color::Rgb;

/// Decode the image at `path` into frames for `led_count` LEDs
pub fn load(path: impl AsRef<Path>, led_count: usize) -> Result<Vec<Vec<Rgb>>, ImageError> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgb8();
    debug!(
        "loaded sample {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(columns(&image, led_count))
}

/// One frame per column, top row first
pub fn columns(image: &RgbImage, led_count: usize) -> Vec<Vec<Rgb>> {
    (0..image.width())
        .map(|x| {
            (0..image.height())
                .take(led_count)
                .map(|y| {
                    let [r, g, b] = image.get_pixel(x, y).0;
                    Rgb::new(r, g, b)
                })
                .collect()
        })
        .collect()
}
