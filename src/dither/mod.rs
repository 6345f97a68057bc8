//! Error diffusion over the device palette.
//!
//! One table-driven loop serves all four kernels; the tables in [`kernel`]
//! are the only thing that differs between algorithms, apart from the
//! one-pass/two-pass structure tag they carry.
//!
//! The scan is strictly row-major, left to right, top to bottom — no
//! serpentine. A full-raster working buffer of f32 channels accumulates
//! propagated error so that quantizing a pixel never corrupts the values
//! still to be read, and later pixels see the error of earlier ones.

mod kernel;

pub use kernel::{Kernel, PassStructure, ATKINSON, FLOYD_STEINBERG, JARVIS, STUCKI};

use tracing::debug;

use crate::config::DitherType;
use crate::palette::Palette;
use crate::raster::Raster;

/// Look up the kernel for a dither selection; `None` means passthrough.
fn kernel_for(ty: DitherType) -> Option<&'static Kernel> {
    match ty {
        DitherType::FloydSteinberg => Some(&FLOYD_STEINBERG),
        DitherType::Atkinson => Some(&ATKINSON),
        DitherType::Stucki => Some(&STUCKI),
        DitherType::Jarvis => Some(&JARVIS),
        DitherType::None => None,
    }
}

/// Full-raster copy of the RGB channels used to accumulate diffused error.
///
/// f32 channels: accumulated error is fractional, and clamping happens on
/// every addition so values stay within [0, 255] at all times.
struct WorkingBuffer {
    channels: Vec<f32>,
    width: usize,
}

impl WorkingBuffer {
    fn from_raster(raster: &Raster) -> Self {
        let mut channels = Vec::with_capacity(raster.width() * raster.height() * 3);
        for px in raster.data().chunks_exact(4) {
            channels.push(px[0] as f32);
            channels.push(px[1] as f32);
            channels.push(px[2] as f32);
        }
        Self {
            channels,
            width: raster.width(),
        }
    }

    #[inline]
    fn rgb(&self, x: usize, y: usize) -> [f32; 3] {
        let i = (y * self.width + x) * 3;
        [self.channels[i], self.channels[i + 1], self.channels[i + 2]]
    }

    #[inline]
    fn add_clamped(&mut self, x: usize, y: usize, err: [f32; 3]) {
        let i = (y * self.width + x) * 3;
        for c in 0..3 {
            self.channels[i + c] = (self.channels[i + c] + err[c]).clamp(0.0, 255.0);
        }
    }
}

/// Quantize a raster to the device palette with error diffusion, in place.
///
/// Only the RGB channels are rewritten; alpha passes through. With
/// [`DitherType::None`] the raster is returned untouched (passthrough, not
/// an error). `strength` scales the propagated error: 1.0 is the classic
/// algorithm, 0.0 degenerates to plain per-pixel nearest matching.
///
/// The result contains only palette colors, which is also what makes it
/// usable as a preview before packing.
pub fn dither(raster: &mut Raster, ty: DitherType, strength: f32) {
    let Some(kernel) = kernel_for(ty) else {
        debug!(?ty, "no diffusion kernel selected, passing raster through");
        return;
    };

    let width = raster.width();
    let height = raster.height();
    debug!(width, height, ?ty, strength, "error diffusion pass");

    let palette = Palette::device();
    let mut work = WorkingBuffer::from_raster(raster);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = work.rgb(x, y);
            let closest = palette.find_closest(r, g, b);

            if kernel.pass == PassStructure::Single {
                raster.set_rgb(x, y, closest.rgb);
            }

            let err = [
                (r - closest.rgb[0] as f32) * strength,
                (g - closest.rgb[1] as f32) * strength,
                (b - closest.rgb[2] as f32) * strength,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                let ny = y + dy as usize;
                // Out-of-bounds neighbors lose their share of the error.
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let scale = weight as f32 / divisor;
                    work.add_clamped(
                        nx as usize,
                        ny,
                        [err[0] * scale, err[1] * scale, err[2] * scale],
                    );
                }
            }
        }
    }

    if kernel.pass == PassStructure::Double {
        // Second scan: re-match every working-buffer pixel now that all
        // error has been distributed.
        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = work.rgb(x, y);
                raster.set_rgb(x, y, palette.find_closest(r, g, b).rgb);
            }
        }
    }
}
