//! Packed wire formats for the display firmware.
//!
//! Each submodule implements one bit-packing scheme; [`pack`] dispatches on
//! the configured [`DitherMode`]. Buffer length and bit layout depend only
//! on the mode and the raster dimensions. The classifiers in here are
//! deliberately coarse per-pixel threshold rules, not the perceptual palette
//! matcher — the raster is expected to already hold dithered palette colors
//! when fidelity matters.

mod black_white;
mod four_color;
mod six_color;
mod three_color;

use tracing::debug;

use crate::config::DitherMode;
use crate::raster::Raster;

/// Luminance cut between "dark" and "light" pixels, shared by the
/// monochrome formats and the brightest four-color bucket.
pub(crate) const LUMA_THRESHOLD: u8 = 140;

/// Pack a raster into the wire format selected by `mode`.
///
/// A [`DitherMode::Unknown`] mode yields an empty buffer, not an error.
pub fn pack(raster: &Raster, mode: DitherMode) -> Vec<u8> {
    debug!(
        width = raster.width(),
        height = raster.height(),
        ?mode,
        "packing raster"
    );
    match mode {
        DitherMode::SixColor => six_color::pack(raster),
        DitherMode::FourColor => four_color::pack(raster),
        DitherMode::BlackWhiteColor => black_white::pack(raster),
        DitherMode::ThreeColor => three_color::pack(raster),
        DitherMode::Unknown => Vec::new(),
    }
}

/// Rec. 601 luma of an RGB triple, rounded to the nearest integer.
#[inline]
pub(crate) fn luminance([r, g, b]: [u8; 3]) -> u8 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as u8
}

/// Pack one bit per pixel, MSB first, each row padded to a byte boundary.
///
/// The plane is `ceil(width / 8) * height` bytes; `predicate` decides which
/// pixels set their bit.
pub(crate) fn pack_plane<F>(raster: &Raster, predicate: F) -> Vec<u8>
where
    F: Fn([u8; 3]) -> bool,
{
    let width = raster.width();
    let byte_width = width.div_ceil(8);
    let mut plane = vec![0u8; byte_width * raster.height()];
    for y in 0..raster.height() {
        for x in 0..width {
            if predicate(raster.rgb(x, y)) {
                plane[y * byte_width + x / 8] |= 1 << (7 - x % 8);
            }
        }
    }
    plane
}
