//! CIE L\*a\*b\* color type and the weighted distance used for matching.

/// A color in CIE L\*a\*b\* space (D65 reference white).
///
/// `l` is lightness (0 = black, 100 = diffuse white); `a` and `b` are the
/// green–red and blue–yellow opponent axes. Euclidean-style distances in
/// this space track perceived color difference far better than distances
/// between raw sRGB channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0..=100 for in-gamut sRGB input.
    pub l: f32,
    /// Green (negative) to red (positive) axis.
    pub a: f32,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f32,
}

/// D65 reference white, the standard illuminant for sRGB.
const D65: [f32; 3] = [95.047, 100.0, 108.883];

/// sRGB gamma curve switches from linear to power law at this encoded value.
const SRGB_GAMMA_KNEE: f32 = 0.04045;

/// XYZ-to-Lab curve switches from cube root to linear at this ratio
/// ((6/29)^3, the CIE epsilon).
const LAB_EPSILON: f32 = 0.008856;

impl Lab {
    /// Convert 8-bit-scaled sRGB channels (0.0..=255.0) to Lab.
    ///
    /// Channels are accepted as floats because the dithering working buffer
    /// carries fractional values between error additions. NaN channels are
    /// treated as 0 by the gamma branch guard rather than propagated.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        // Decode gamma, then scale to the 0..100 range the XYZ matrix expects.
        let r = srgb_to_linear(r / 255.0) * 100.0;
        let g = srgb_to_linear(g / 255.0) * 100.0;
        let b = srgb_to_linear(b / 255.0) * 100.0;

        // Linear RGB -> XYZ (sRGB primaries, D65).
        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = lab_curve(x / D65[0]);
        let fy = lab_curve(y / D65[1]);
        let fz = lab_curve(z / D65[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Weighted Euclidean distance tuned for the device palette.
    ///
    /// Lightness differences are down-weighted (0.2) and the chromatic axes
    /// up-weighted (3.0) so that hue mismatches cost far more than
    /// brightness mismatches. A saturated display reproduces hue errors much
    /// more visibly than lightness errors.
    pub fn distance(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (0.2 * dl * dl + 3.0 * da * da + 3.0 * db * db).sqrt()
    }
}

/// Decode one sRGB-encoded channel (0.0..=1.0) to linear light.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    // NaN guard: a NaN channel behaves as 0, keeping the whole conversion
    // finite (NaN fails every comparison, so it would otherwise fall into
    // the linear branch and stay NaN).
    if c.is_nan() {
        return 0.0;
    }
    if c > SRGB_GAMMA_KNEE {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// The CIE f() curve applied to each normalized XYZ component.
#[inline]
fn lab_curve(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_origin() {
        let lab = Lab::from_rgb(0.0, 0.0, 0.0);
        assert!(lab.l.abs() < 1e-4, "black L should be 0, got {}", lab.l);
        assert!(lab.a.abs() < 1e-4, "black a should be 0, got {}", lab.a);
        assert!(lab.b.abs() < 1e-4, "black b should be 0, got {}", lab.b);
    }

    #[test]
    fn test_white_is_achromatic_full_lightness() {
        let lab = Lab::from_rgb(255.0, 255.0, 255.0);
        assert!(
            (lab.l - 100.0).abs() < 0.1,
            "white L should be ~100, got {}",
            lab.l
        );
        assert!(lab.a.abs() < 0.5, "white a should be ~0, got {}", lab.a);
        assert!(lab.b.abs() < 0.5, "white b should be ~0, got {}", lab.b);
    }

    #[test]
    fn test_pure_red_reference_value() {
        // Published sRGB red is approximately L=53.2, a=80.1, b=67.2.
        let lab = Lab::from_rgb(255.0, 0.0, 0.0);
        assert!((lab.l - 53.2).abs() < 0.5, "red L off: {}", lab.l);
        assert!((lab.a - 80.1).abs() < 0.5, "red a off: {}", lab.a);
        assert!((lab.b - 67.2).abs() < 0.5, "red b off: {}", lab.b);
    }

    #[test]
    fn test_greys_stay_on_the_l_axis() {
        for v in [32.0, 96.0, 160.0, 224.0] {
            let lab = Lab::from_rgb(v, v, v);
            assert!(lab.a.abs() < 0.5, "grey {} has a = {}", v, lab.a);
            assert!(lab.b.abs() < 0.5, "grey {} has b = {}", v, lab.b);
        }
    }

    #[test]
    fn test_distance_is_zero_on_self_and_symmetric() {
        let p = Lab::from_rgb(10.0, 200.0, 30.0);
        let q = Lab::from_rgb(200.0, 10.0, 30.0);
        assert_eq!(p.distance(p), 0.0);
        assert!((p.distance(q) - q.distance(p)).abs() < 1e-4);
    }

    #[test]
    fn test_distance_weights_chroma_over_lightness() {
        let grey_dark = Lab::from_rgb(100.0, 100.0, 100.0);
        let grey_light = Lab::from_rgb(160.0, 160.0, 160.0);
        let reddish = Lab::from_rgb(160.0, 100.0, 100.0);
        // The chromatic shift should cost more than the lightness shift even
        // though both move a single channel by the same amount.
        assert!(grey_dark.distance(reddish) > grey_dark.distance(grey_light));
    }

    #[test]
    fn test_nan_channel_treated_as_zero() {
        let lab = Lab::from_rgb(f32::NAN, 0.0, 0.0);
        let black = Lab::from_rgb(0.0, 0.0, 0.0);
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
        assert!(lab.distance(black) < 1e-4);
    }
}
