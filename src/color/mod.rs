//! Color space conversion for perceptual palette matching.
//!
//! Only one conversion is needed: 8-bit sRGB to CIE L\*a\*b\*, used by the
//! palette matcher to compare colors the way the eye does rather than by raw
//! channel values. Lab values are transient; nothing downstream stores them.

mod lab;

pub use lab::Lab;
