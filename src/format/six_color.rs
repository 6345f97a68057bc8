//! Six-color format: two 4-bit color codes per byte.
//!
//! Pixels are taken pairwise along each row; the left pixel's code lands in
//! the high nibble. Classification is a coarse per-channel threshold rule
//! around 128, not the palette matcher — the codes are firmware color
//! numbers, unrelated to [`PaletteColor::device_code`] byte values.
//!
//! Known boundary limitation: on odd-width rasters the final, unpaired
//! column of each row is skipped entirely. The buffer keeps its documented
//! `ceil(width * height / 2)` length and the unwritten bytes stay zero.
//! Firmware-side decoders rely on this exact layout, so the truncation is
//! preserved rather than repaired.
//!
//! [`PaletteColor::device_code`]: crate::PaletteColor::device_code

use crate::raster::Raster;

pub(crate) fn pack(raster: &Raster) -> Vec<u8> {
    let width = raster.width();
    let height = raster.height();
    let mut packed = vec![0u8; (width * height).div_ceil(2)];

    for y in 0..height {
        let mut x = 0;
        while x + 1 < width {
            let hi = classify(raster.rgb(x, y));
            let lo = classify(raster.rgb(x + 1, y));
            packed[(y * width + x) / 2] = (hi << 4) | lo;
            x += 2;
        }
    }
    packed
}

/// Coarse channel-threshold classification into firmware color codes.
///
/// A channel exactly at 128 counts as neither low nor high, so such pixels
/// fall through to the default code 0x01 (white).
fn classify([r, g, b]: [u8; 3]) -> u8 {
    if r < 128 && g < 128 && b < 128 {
        0x00 // black
    } else if r > 128 && g > 128 && b > 128 {
        0x01 // white
    } else if r > 128 && g < 128 && b < 128 {
        0x03 // red
    } else if r > 128 && g > 128 && b < 128 {
        0x02 // yellow
    } else if r < 128 && g > 128 && b < 128 {
        0x06 // green
    } else if r < 128 && g < 128 && b > 128 {
        0x05 // blue
    } else {
        0x01
    }
}
