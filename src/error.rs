//! Error types for raster validation.

use thiserror::Error;

/// Errors reported when a caller hands over a malformed raster.
///
/// These are the only failure modes of the crate: every later stage
/// (dithering, packing) is total once the raster has been validated by
/// [`Raster::new`](crate::Raster::new). Unrecognized dither names or modes
/// degrade to passthrough / empty output instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero, so there are no pixels to process.
    #[error("raster dimensions cannot be zero: {width}x{height}")]
    EmptyRaster {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// The pixel buffer does not hold exactly `width * height` RGBA pixels.
    ///
    /// This also covers buffers whose length is not a multiple of 4.
    #[error("raster buffer is {len} bytes but {width}x{height} RGBA requires {expected}")]
    BufferSizeMismatch {
        /// Actual buffer length in bytes
        len: usize,
        /// Expected buffer length (`width * height * 4`)
        expected: usize,
        /// Raster width in pixels
        width: usize,
        /// Raster height in pixels
        height: usize,
    },
}
