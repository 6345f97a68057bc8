//! Four-color format: four 2-bit grey levels per byte.
//!
//! Each pixel's luminance is bucketed into one of four firmware codes and
//! packed most-significant pair first. The byte index is derived from the
//! global pixel index (`(y * width + x) / 4`) while the bit position is
//! derived from the column (`x % 4`); when the width is not a multiple of 4
//! the two drift apart at row boundaries, exactly as the firmware expects.

use super::luminance;
use crate::raster::Raster;

pub(crate) fn pack(raster: &Raster) -> Vec<u8> {
    let width = raster.width();
    let height = raster.height();
    let mut packed = vec![0u8; (width * height).div_ceil(4)];

    for y in 0..height {
        for x in 0..width {
            let code = bucket(luminance(raster.rgb(x, y)));
            let shift = 6 - (x % 4) * 2;
            packed[(y * width + x) / 4] |= code << shift;
        }
    }
    packed
}

/// Luminance buckets: dark to light is 0x03, 0x02, 0x00, 0x01.
///
/// The codes are firmware grey levels, not ordered by brightness.
fn bucket(grey: u8) -> u8 {
    if grey < 64 {
        0x03
    } else if grey < 128 {
        0x02
    } else if grey < 140 {
        0x00
    } else {
        0x01
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grey_raster(width: usize, height: usize, greys: &[u8]) -> Raster {
        let mut data = Vec::with_capacity(greys.len() * 4);
        for &v in greys {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        Raster::new(width, height, data).unwrap()
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket(0), 0x03);
        assert_eq!(bucket(63), 0x03);
        assert_eq!(bucket(64), 0x02);
        assert_eq!(bucket(127), 0x02);
        assert_eq!(bucket(128), 0x00);
        assert_eq!(bucket(139), 0x00);
        assert_eq!(bucket(140), 0x01);
        assert_eq!(bucket(255), 0x01);
    }

    #[test]
    fn test_msb_first_packing() {
        // One full byte: dark, dim, mid, light -> 11 10 00 01
        let raster = grey_raster(4, 1, &[0, 100, 130, 200]);
        assert_eq!(pack(&raster), vec![0b1110_0001]);
    }

    #[test]
    fn test_width_not_multiple_of_four_overlaps_bytes() {
        // 2x2: all four pixels share byte 0. Row 1 restarts at shift 6,
        // colliding with row 0's bits — preserved reference behavior.
        let raster = grey_raster(2, 2, &[0, 255, 255, 0]);
        // (0x03<<6) | (0x01<<4) | (0x01<<6) | (0x03<<4) = 0xF0
        assert_eq!(pack(&raster), vec![0xF0]);
    }

    #[test]
    fn test_full_byte_rows_do_not_overlap() {
        let raster = grey_raster(4, 2, &[0, 0, 0, 0, 255, 255, 255, 255]);
        assert_eq!(pack(&raster), vec![0xFF, 0x55]);
    }
}
