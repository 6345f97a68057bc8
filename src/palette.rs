//! The fixed device palette and perceptual nearest-color matching.
//!
//! The display firmware knows exactly six colors. Each entry carries the
//! sRGB definition used for matching and preview, plus the byte value the
//! firmware expects on the wire (distinct from the RGB definition).

use crate::color::Lab;

/// One entry of the device palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    /// Human-readable color name.
    pub name: &'static str,
    /// sRGB definition of the color.
    pub rgb: [u8; 3],
    /// Byte value the display firmware expects for this color.
    pub device_code: u8,
}

/// The six colors the display can produce, in declaration order.
///
/// Declaration order is load-bearing: the matcher keeps the first entry on
/// a distance tie, so reordering this table changes output on ties.
pub const DEVICE_COLORS: [PaletteColor; 6] = [
    PaletteColor {
        name: "Yellow",
        rgb: [255, 255, 0],
        device_code: 0xE2,
    },
    PaletteColor {
        name: "Green",
        rgb: [41, 204, 20],
        device_code: 0x96,
    },
    PaletteColor {
        name: "Blue",
        rgb: [0, 0, 255],
        device_code: 0x1D,
    },
    PaletteColor {
        name: "Red",
        rgb: [255, 0, 0],
        device_code: 0x4C,
    },
    PaletteColor {
        name: "Black",
        rgb: [0, 0, 0],
        device_code: 0x00,
    },
    PaletteColor {
        name: "White",
        rgb: [255, 255, 255],
        device_code: 0xFF,
    },
];

/// Index of Blue in [`DEVICE_COLORS`], used by the matching shortcut.
const BLUE: usize = 2;

/// The device palette with Lab values precomputed for matching.
///
/// Palette colors never change, so their Lab conversions are done once at
/// construction instead of once per pixel per palette entry.
#[derive(Debug, Clone)]
pub struct Palette {
    labs: [Lab; 6],
}

impl Palette {
    /// Build the palette for the device, precomputing Lab values.
    pub fn device() -> Self {
        Self {
            labs: DEVICE_COLORS.map(|c| {
                Lab::from_rgb(c.rgb[0] as f32, c.rgb[1] as f32, c.rgb[2] as f32)
            }),
        }
    }

    /// Returns the palette entries in tie-break order.
    #[inline]
    pub fn colors(&self) -> &'static [PaletteColor; 6] {
        &DEVICE_COLORS
    }

    /// Find the palette entry nearest to an RGB triple.
    ///
    /// Channels are 0.0..=255.0 floats; fractional values occur during
    /// error diffusion.
    ///
    /// A hand-tuned shortcut runs before any distance computation: inputs
    /// with `r < 50 && g < 150 && b > 100` map straight to Blue. Under the
    /// weighted Lab metric, mid-dark blues would otherwise drift to Black.
    ///
    /// Otherwise the entry with the minimum weighted Lab distance wins;
    /// ties keep the earlier entry in [`DEVICE_COLORS`] order.
    pub fn find_closest(&self, r: f32, g: f32, b: f32) -> &'static PaletteColor {
        if r < 50.0 && g < 150.0 && b > 100.0 {
            return &DEVICE_COLORS[BLUE];
        }

        let input = Lab::from_rgb(r, g, b);
        let mut min_distance = f32::INFINITY;
        let mut closest = &DEVICE_COLORS[0];
        for (color, lab) in DEVICE_COLORS.iter().zip(self.labs) {
            let distance = input.distance(lab);
            if distance < min_distance {
                min_distance = distance;
                closest = color;
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_palette_colors_match_themselves() {
        let palette = Palette::device();
        for color in &DEVICE_COLORS {
            let [r, g, b] = color.rgb;
            let matched = palette.find_closest(r as f32, g as f32, b as f32);
            assert_eq!(
                matched.name, color.name,
                "{:?} should match its own palette entry",
                color.rgb
            );
        }
    }

    #[test]
    fn test_blue_shortcut_claims_dark_blues() {
        let palette = Palette::device();
        // (0, 0, 200) may sit closer to Black under the weighted metric,
        // but the shortcut must claim it for Blue.
        assert_eq!(palette.find_closest(0.0, 0.0, 200.0).name, "Blue");
        // Strict comparisons: the whole window interior qualifies.
        assert_eq!(palette.find_closest(49.9, 149.9, 100.1).name, "Blue");
    }

    #[test]
    fn test_near_palette_colors_snap() {
        let palette = Palette::device();
        assert_eq!(palette.find_closest(250.0, 250.0, 250.0).name, "White");
        assert_eq!(palette.find_closest(10.0, 10.0, 10.0).name, "Black");
        assert_eq!(palette.find_closest(240.0, 20.0, 20.0).name, "Red");
        assert_eq!(palette.find_closest(240.0, 240.0, 30.0).name, "Yellow");
        assert_eq!(palette.find_closest(60.0, 190.0, 40.0).name, "Green");
    }

    #[test]
    fn test_device_codes() {
        let codes: Vec<u8> = DEVICE_COLORS.iter().map(|c| c.device_code).collect();
        assert_eq!(codes, vec![0xE2, 0x96, 0x1D, 0x4C, 0x00, 0xFF]);
    }

    #[test]
    fn test_tie_break_order_is_declaration_order() {
        assert_eq!(DEVICE_COLORS[0].name, "Yellow");
        assert_eq!(DEVICE_COLORS[5].name, "White");
    }
}
