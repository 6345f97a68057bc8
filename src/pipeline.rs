//! The full raster-to-bitstream pipeline.
//!
//! `contrast -> dither -> pack`, each stage handing its output to the next.
//! The raster is mutated in place so the caller can inspect (or upload a
//! preview of) the dithered image after [`encode`] returns.

use tracing::debug;

use crate::config::Config;
use crate::dither::dither;
use crate::format::pack;
use crate::raster::Raster;

/// Midpoint the contrast stretch pivots around.
const CONTRAST_MIDPOINT: f32 = 128.0;

/// Linear contrast stretch around 128, in place.
///
/// Every R, G and B channel becomes `clamp(0, 255, (c - 128) * factor + 128)`;
/// alpha is untouched. Factor 1.0 is the identity. There are no error
/// conditions: a nonsensical factor produces a flat image, not a fault.
pub fn adjust_contrast(raster: &mut Raster, factor: f32) {
    for px in raster.data_mut().chunks_exact_mut(4) {
        for channel in &mut px[..3] {
            let stretched = (*channel as f32 - CONTRAST_MIDPOINT) * factor + CONTRAST_MIDPOINT;
            *channel = stretched.clamp(0.0, 255.0).round() as u8;
        }
    }
}

/// Run the complete encoding pipeline on a raster.
///
/// Applies the contrast pre-pass, quantizes with the configured diffusion
/// kernel (or passes through for [`DitherType::None`]) and packs the result
/// into the configured wire format. The raster is left holding the dithered
/// image.
///
/// This function is total: raster validation already happened in
/// [`Raster::new`], and unrecognized config variants degrade to passthrough
/// or an empty buffer instead of failing.
///
/// [`DitherType::None`]: crate::DitherType::None
///
/// # Example
///
/// ```
/// use eink_encode::{encode, Config, Raster};
///
/// let mut raster = Raster::new(2, 2, vec![255u8; 16]).unwrap();
/// let packed = encode(&mut raster, &Config::default());
/// assert_eq!(packed.len(), 2); // six-color: two pixels per byte
/// ```
pub fn encode(raster: &mut Raster, config: &Config) -> Vec<u8> {
    debug!(
        width = raster.width(),
        height = raster.height(),
        ?config,
        "encoding raster"
    );
    adjust_contrast(raster, config.contrast);
    dither(raster, config.dither_type, config.dither_strength);
    pack(raster, config.dither_mode)
}
