//! Encoding configuration as produced by the settings layer.
//!
//! Wire names are camelCase to stay compatible with the settings files the
//! frontend writes (`floydSteinberg`, `sixColor`, ...). Names this build
//! does not know deserialize into the catch-all variants instead of failing:
//! an unknown dither selects passthrough, an unknown mode selects an empty
//! packed buffer. The display still gets served either way.

use serde::{Deserialize, Serialize};

/// Error diffusion algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DitherType {
    /// Floyd–Steinberg, 4 neighbors, full error propagation.
    FloydSteinberg,
    /// Atkinson, 6 neighbors, 6/8 of the error propagated.
    Atkinson,
    /// Stucki, 12 neighbors over 3 rows.
    Stucki,
    /// Jarvis–Judice–Ninke, 12 neighbors over 3 rows.
    Jarvis,
    /// No dithering: the raster passes through unmodified.
    None,
}

impl<'de> Deserialize<'de> for DitherType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "floydSteinberg" => DitherType::FloydSteinberg,
            "atkinson" => DitherType::Atkinson,
            "stucki" => DitherType::Stucki,
            "jarvis" => DitherType::Jarvis,
            _ => DitherType::None,
        })
    }
}

/// Wire format selection for the packed output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DitherMode {
    /// Two 4-bit color codes per byte (6-color panels).
    SixColor,
    /// Four 2-bit grey levels per byte.
    FourColor,
    /// 1-bit monochrome, rows padded to byte boundaries.
    BlackWhiteColor,
    /// Two concatenated 1-bit planes: luminance, then red-dominance.
    ThreeColor,
    /// Unrecognized mode: packing produces an empty buffer.
    Unknown,
}

impl<'de> Deserialize<'de> for DitherMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "sixColor" => DitherMode::SixColor,
            "fourColor" => DitherMode::FourColor,
            "blackWhiteColor" => DitherMode::BlackWhiteColor,
            "threeColor" => DitherMode::ThreeColor,
            _ => DitherMode::Unknown,
        })
    }
}

/// Encoding configuration: algorithm, strength, wire format, contrast.
///
/// Missing fields fall back to [`Config::default`], which mirrors the
/// factory settings of the frontend (Floyd–Steinberg at strength 1.0,
/// six-color packing, contrast 1.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Which diffusion kernel to run.
    pub dither_type: DitherType,
    /// Error propagation scale, >= 0 (typically 0..=2). 1.0 propagates the
    /// full quantization error.
    pub dither_strength: f32,
    /// Which packed wire format to emit.
    pub dither_mode: DitherMode,
    /// Contrast pre-pass factor; 1.0 is the identity.
    pub contrast: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dither_type: DitherType::FloydSteinberg,
            dither_strength: 1.0,
            dither_mode: DitherMode::SixColor,
            contrast: 1.2,
        }
    }
}
