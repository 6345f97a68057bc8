//! Three-color format: two concatenated 1-bit planes.
//!
//! Both planes use the monochrome row-padded layout. Plane 1 is the
//! luminance test (light = 1); plane 2 is a red-dominance test where a
//! red pixel clears its bit (`r > 160` and `r` strictly above both other
//! channels → 0, everything else → 1). Plane 1 bytes come first.

use super::{luminance, pack_plane, LUMA_THRESHOLD};
use crate::raster::Raster;

/// Red channel floor for the red-dominance test.
const RED_THRESHOLD: u8 = 160;

pub(crate) fn pack(raster: &Raster) -> Vec<u8> {
    let mut packed = pack_plane(raster, |rgb| luminance(rgb) >= LUMA_THRESHOLD);
    let red_plane = pack_plane(raster, |[r, g, b]| !(r > RED_THRESHOLD && r > g && r > b));
    packed.extend_from_slice(&red_plane);
    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raster_from_rgb(width: usize, height: usize, pixels: &[[u8; 3]]) -> Raster {
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for rgb in pixels {
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Raster::new(width, height, data).unwrap()
    }

    #[test]
    fn test_planes_concatenate_luminance_first() {
        // black, white | red, black
        let raster = raster_from_rgb(
            2,
            2,
            &[[0, 0, 0], [255, 255, 255], [255, 0, 0], [0, 0, 0]],
        );
        let packed = pack(&raster);
        assert_eq!(packed.len(), 4);
        // Luminance plane: row 0 -> 01, row 1 -> red luma 76 is dark -> 00
        assert_eq!(&packed[..2], &[0b0100_0000, 0b0000_0000]);
        // Red plane: only the red pixel clears its bit.
        assert_eq!(&packed[2..], &[0b1100_0000, 0b0100_0000]);
    }

    #[test]
    fn test_red_dominance_requires_strict_majority() {
        // r must exceed 160 and strictly exceed g and b.
        let raster = raster_from_rgb(
            4,
            1,
            &[
                [200, 0, 0],     // red-dominant -> 0
                [160, 0, 0],     // at the threshold, not above -> 1
                [200, 200, 0],   // r == g -> 1
                [255, 255, 255], // white -> 1
            ],
        );
        let packed = pack(&raster);
        assert_eq!(packed[1], 0b0111_0000);
    }

    #[test]
    fn test_uniform_red_field() {
        let raster = raster_from_rgb(8, 1, &[[255, 0, 0]; 8]);
        let packed = pack(&raster);
        // Red luma 76: dark in plane 1; red-dominant: all bits clear in plane 2.
        assert_eq!(packed, vec![0x00, 0x00]);
    }
}
