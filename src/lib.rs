//! eink-encode: raster to device bitstream for fixed-palette e-ink frames.
//!
//! This crate is the numeric core of a photo-frame uploader: it turns an
//! arbitrary RGBA raster into the bandwidth-minimal bitstream a fixed-palette
//! e-paper display expects. Everything around it — image decoding, rotation
//! and scaling, QR overlays, the HTTP upload — lives with the caller; the
//! entire boundary of this crate is `{Raster, Config} -> packed bytes`, plus
//! the intermediate raster-to-raster dithering contract for previews.
//!
//! # Pipeline
//!
//! ```text
//! RGBA raster
//!     |
//!     v
//! [Contrast adjust]      linear stretch around 128, in place
//!     |
//!     v
//! [Error diffusion]      nearest palette color per pixel (weighted Lab
//!     |                  distance), quantization error diffused forward
//!     |                  through a working buffer; four kernels
//!     v
//! [Bit packing]          one of four wire formats, selected by mode
//!     |
//!     v
//! packed bytes -> uploader
//! ```
//!
//! # Quick start
//!
//! ```
//! use eink_encode::{encode, Config, Raster};
//!
//! // A 2x2 mid-grey image.
//! let mut data = Vec::new();
//! for _ in 0..4 {
//!     data.extend_from_slice(&[128, 128, 128, 255]);
//! }
//! let mut raster = Raster::new(2, 2, data).unwrap();
//!
//! let packed = encode(&mut raster, &Config::default());
//! assert_eq!(packed.len(), 2); // six-color mode packs two pixels per byte
//! ```
//!
//! # Color matching
//!
//! The display produces exactly six colors ([`DEVICE_COLORS`]). Matching
//! happens in CIE L\*a\*b\* with a weighted distance (`0.2·ΔL² + 3·Δa² +
//! 3·Δb²`, square-rooted) that punishes hue errors far harder than
//! lightness errors, plus one hand-tuned shortcut that claims dark blues
//! for Blue before any distance is computed. Raw sRGB distances would
//! happily map saturated colors to grey neighbors of similar brightness.
//!
//! # Determinism
//!
//! Every stage is a pure, synchronous function of its inputs: same raster
//! and config in, same bytes out. Separate images may be encoded on
//! separate threads, but a single raster's diffusion is one ordered scan —
//! later pixels depend on the error of earlier ones.

pub mod color;
pub mod config;
pub mod dither;
pub mod error;
pub mod format;
pub mod palette;
pub mod pipeline;
pub mod raster;


pub use config::{Config, DitherMode, DitherType};
pub use dither::dither;
pub use error::EncodeError;
pub use format::pack;
pub use palette::{Palette, PaletteColor, DEVICE_COLORS};
pub use pipeline::{adjust_contrast, encode};
pub use raster::Raster;
