//! Monochrome format: 1 bit per pixel, light = 1.
//!
//! Pixels at or above the shared luminance threshold set their bit. Bits are
//! packed MSB first and each row is padded to a byte boundary, so the buffer
//! is `ceil(width / 8) * height` bytes.

use super::{luminance, pack_plane, LUMA_THRESHOLD};
use crate::raster::Raster;

pub(crate) fn pack(raster: &Raster) -> Vec<u8> {
    pack_plane(raster, |rgb| luminance(rgb) >= LUMA_THRESHOLD)
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
    fn test_threshold_is_inclusive_at_140() {
        let raster = grey_raster(2, 1, &[139, 140]);
        assert_eq!(pack(&raster), vec![0b0100_0000]);
    }

    #[test]
    fn test_golden_2x2_checkerboard() {
        // Dark/light checkerboard: row 0 sets bit 6, row 1 sets bit 7.
        let raster = grey_raster(2, 2, &[10, 250, 250, 10]);
        assert_eq!(pack(&raster), vec![0x40, 0x80]);
    }

    #[test]
    fn test_round_trip_against_direct_classification() {
        // Decode the packed plane with the documented layout and compare
        // against re-computing the threshold straight from the raster.
        let greys: Vec<u8> = (0..60).map(|i| (i * 41 % 256) as u8).collect();
        let raster = grey_raster(12, 5, &greys);
        let packed = pack(&raster);
        let byte_width = 12usize.div_ceil(8);
        for y in 0..5 {
            for x in 0..12 {
                let bit = (packed[y * byte_width + x / 8] >> (7 - x % 8)) & 1;
                let expected = u8::from(luminance(raster.rgb(x, y)) >= LUMA_THRESHOLD);
                assert_eq!(bit, expected, "bit mismatch at ({}, {})", x, y);
            }
        }
    }
}
