//! Validated RGBA raster buffer.
//!
//! [`Raster`] is the unit of work for the whole pipeline: a row-major RGBA
//! byte buffer with its dimensions. Validation happens once at construction;
//! every later stage can index freely without bounds failures.

use crate::error::EncodeError;

/// A row-major RGBA raster (4 bytes per pixel).
///
/// The raster is owned by the caller and mutated in place by the contrast
/// and dithering stages; the packing stage only reads it. Alpha bytes are
/// carried through every stage untouched.
///
/// # Example
///
/// ```
/// use eink_encode::Raster;
///
/// let raster = Raster::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(raster.rgb(0, 0), [255, 0, 0]);
/// assert_eq!(raster.rgb(1, 0), [0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    width: usize,
    /// Height in pixels.
    height: usize,
    /// RGBA bytes, `width * height * 4` long.
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::EmptyRaster`] if `width` or `height` is zero
    /// - [`EncodeError::BufferSizeMismatch`] if `data.len()` is not exactly
    ///   `width * height * 4` (this includes lengths that are not a multiple
    ///   of 4)
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::EmptyRaster { width, height });
        }
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                len: data.len(),
                expected,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the RGBA bytes in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA bytes mutably.
    ///
    /// The length is fixed at construction; callers may rewrite pixel values
    /// but must not resize the buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster, returning its RGBA bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Read the RGB channels of the pixel at `(x, y)`.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite the RGB channels of the pixel at `(x, y)`, leaving alpha.
    #[inline]
    pub(crate) fn set_rgb(&mut self, x: usize, y: usize, [r, g, b]: [u8; 3]) {
        let i = (y * self.width + x) * 4;
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }
}
