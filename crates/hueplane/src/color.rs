use std::sync::OnceLock;

use crate::core::{
    display_p3_to_xyz, format_css_p3, in_gamut, map_into_gamut, srgb_to_hex, srgb_to_xyz,
    to_eq_triple, xyz_to_display_p3, xyz_to_srgb, LchModel, RgbGamut,
};
use crate::Float;

/// A color with its perceptual and device representations.
///
/// A color is created through a [`ColorSpace`](crate::ColorSpace), either
/// from perceptual lightness/chroma/hue coordinates or by parsing a color
/// string. Either way, construction eagerly derives the representation the
/// other path would have provided, the sRGB and Display P3 coordinates, and
/// the gamut membership flags. The string representations are lazy, since
/// the out-of-gamut case requires a gamut-mapping search, and memoized,
/// since chart rendering asks for the same string over and over.
///
/// The sRGB and Display P3 coordinates are stored unclamped, which preserves
/// the information which side of the gamut boundary a color falls on. The
/// byte-ranged accessors [`r`](Color::r), [`g`](Color::g), [`b`](Color::b),
/// and [`p3`](Color::p3) clamp before scaling.
///
/// Two colors are equal if they use the same perceptual model and their
/// coordinates are equal after removing full hue rotations and rounding away
/// the least significant digits.
#[derive(Clone)]
pub struct Color {
    model: LchModel,
    lightness: Float,
    chroma: Float,
    hue: Float,
    srgb: [Float; 3],
    p3: [Float; 3],
    within_srgb: bool,
    within_p3: bool,
    within_rec2020: bool,
    hex: OnceLock<String>,
    css: OnceLock<String>,
}

impl Color {
    /// Create a new color from perceptual coordinates.
    pub(crate) fn from_lch(model: LchModel, lightness: Float, chroma: Float, hue: Float) -> Self {
        let xyz = model.lch_to_xyz(&[lightness, chroma, hue]);
        let srgb = xyz_to_srgb(&xyz);
        let p3 = xyz_to_display_p3(&xyz);

        // The gamuts are nested, so the flags short-circuit outward.
        let within_srgb = in_gamut(&srgb);
        let within_p3 = within_srgb || in_gamut(&p3);
        let within_rec2020 = within_p3 || RgbGamut::Rec2020.contains(&xyz);

        Self {
            model,
            lightness,
            chroma,
            hue,
            srgb,
            p3,
            within_srgb,
            within_p3,
            within_rec2020,
            hex: OnceLock::new(),
            css: OnceLock::new(),
        }
    }

    /// Create a new color from sRGB unit coordinates, as produced by the
    /// hexadecimal parser. Since the coordinates are in gamut by
    /// construction, both string representations are pre-computed.
    pub(crate) fn from_srgb_units(model: LchModel, units: [Float; 3]) -> Self {
        let xyz = srgb_to_xyz(&units);
        let [lightness, chroma, hue] = model.xyz_to_lch(&xyz);
        let hex = srgb_to_hex(&units);

        Self {
            model,
            lightness,
            chroma,
            hue,
            srgb: units,
            p3: xyz_to_display_p3(&xyz),
            within_srgb: true,
            within_p3: true,
            within_rec2020: true,
            css: OnceLock::from(hex.clone()),
            hex: OnceLock::from(hex),
        }
    }

    /// Create a new color from Display P3 unit coordinates, as produced by
    /// the `color()` parser.
    pub(crate) fn from_p3_units(model: LchModel, units: [Float; 3]) -> Self {
        let xyz = display_p3_to_xyz(&units);
        let [lightness, chroma, hue] = model.xyz_to_lch(&xyz);
        let srgb = xyz_to_srgb(&xyz);

        let within_p3 = in_gamut(&units);
        let within_rec2020 = within_p3 || RgbGamut::Rec2020.contains(&xyz);

        Self {
            model,
            lightness,
            chroma,
            hue,
            srgb,
            p3: units,
            within_srgb: in_gamut(&srgb),
            within_p3,
            within_rec2020,
            hex: OnceLock::new(),
            css: OnceLock::new(),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access this color's perceptual model.
    pub const fn model(&self) -> LchModel {
        self.model
    }

    /// Access this color's lightness.
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Access this color's chroma.
    pub const fn chroma(&self) -> Float {
        self.chroma
    }

    /// Access this color's hue in degrees. Achromatic colors report the 0°
    /// sentinel.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access this color's perceptual coordinates.
    pub const fn lch(&self) -> [Float; 3] {
        [self.lightness, self.chroma, self.hue]
    }

    /// This color's red coordinate on the byte range `0.0..=255.0`, clamped
    /// to the sRGB gamut.
    pub fn r(&self) -> Float {
        self.srgb[0].clamp(0.0, 1.0) * 255.0
    }

    /// This color's green coordinate on the byte range `0.0..=255.0`,
    /// clamped to the sRGB gamut.
    pub fn g(&self) -> Float {
        self.srgb[1].clamp(0.0, 1.0) * 255.0
    }

    /// This color's blue coordinate on the byte range `0.0..=255.0`, clamped
    /// to the sRGB gamut.
    pub fn b(&self) -> Float {
        self.srgb[2].clamp(0.0, 1.0) * 255.0
    }

    /// This color's Display P3 coordinates on the byte range `0.0..=255.0`,
    /// clamped to the Display P3 gamut.
    pub fn p3(&self) -> [Float; 3] {
        [
            self.p3[0].clamp(0.0, 1.0) * 255.0,
            self.p3[1].clamp(0.0, 1.0) * 255.0,
            self.p3[2].clamp(0.0, 1.0) * 255.0,
        ]
    }

    /// Determine whether this color falls within the sRGB gamut.
    pub const fn within_srgb(&self) -> bool {
        self.within_srgb
    }

    /// Determine whether this color falls within the Display P3 gamut.
    pub const fn within_p3(&self) -> bool {
        self.within_p3
    }

    /// Determine whether this color falls within the Rec. 2020 gamut.
    pub const fn within_rec2020(&self) -> bool {
        self.within_rec2020
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// This color as a hashed hexadecimal string, such as `#ffca00`.
    ///
    /// Out-of-gamut colors are first mapped into sRGB by reducing chroma at
    /// constant lightness and hue, so the result always denotes a displayable
    /// color. The string is computed on first use and memoized.
    pub fn hex(&self) -> &str {
        self.hex.get_or_init(|| {
            if self.within_srgb {
                srgb_to_hex(&self.srgb)
            } else {
                let mapped = map_into_gamut(self.model, RgbGamut::Srgb, &self.lch());
                srgb_to_hex(&mapped)
            }
        })
    }

    /// This color as a CSS color string.
    ///
    /// Colors within the sRGB gamut format as hashed hexadecimal. Colors
    /// beyond sRGB but within Display P3 format as `color(display-p3 ...)`.
    /// Colors beyond Display P3 fall back to the gamut-mapped hexadecimal
    /// string. The string is computed on first use and memoized.
    pub fn css(&self) -> &str {
        if self.within_srgb {
            return self.hex();
        }

        self.css.get_or_init(|| {
            if self.within_p3 {
                format_css_p3(&self.p3)
            } else {
                self.hex().to_string()
            }
        })
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model
            && to_eq_triple(true, &self.lch()) == to_eq_triple(true, &other.lch())
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Color")
            .field("model", &self.model)
            .field("lightness", &self.lightness)
            .field("chroma", &self.chroma)
            .field("hue", &self.hue)
            .field("within_srgb", &self.within_srgb)
            .field("within_p3", &self.within_p3)
            .field("within_rec2020", &self.within_rec2020)
            .finish()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, LchModel};

    #[test]
    fn test_white() {
        let white = Color::from_lch(LchModel::CieLch, 100.0, 0.0, 0.0);
        assert!((white.r() - 255.0).abs() < 1e-6);
        assert!((white.g() - 255.0).abs() < 1e-6);
        assert!((white.b() - 255.0).abs() < 1e-6);
        assert!(white.within_srgb());
        assert_eq!(white.hex(), "#ffffff");
        assert_eq!(white.css(), "#ffffff");
    }

    #[test]
    fn test_from_srgb_units() {
        let yellow = Color::from_srgb_units(LchModel::OkLch, [1.0, 202.0 / 255.0, 0.0]);
        assert!(yellow.within_srgb());
        assert!(yellow.within_p3());
        assert!(yellow.within_rec2020());
        assert_eq!(yellow.hex(), "#ffca00");
        assert_eq!(yellow.css(), "#ffca00");
        assert_eq!(yellow.to_string(), "#ffca00");
    }

    #[test]
    fn test_p3_only_color() {
        let green = Color::from_p3_units(LchModel::OkLch, [0.0, 1.0, 0.0]);
        assert!(!green.within_srgb());
        assert!(green.within_p3());
        assert!(green.within_rec2020());
        assert_eq!(green.css(), "color(display-p3 0 1 0)");

        // The perceptual coordinates reproduce the same color.
        let via_lch = Color::from_lch(
            green.model(),
            green.lightness(),
            green.chroma(),
            green.hue(),
        );
        assert!(!via_lch.within_srgb());
        assert!(via_lch.within_p3());
        assert!(via_lch.css().starts_with("color(display-p3 "));
        assert_eq!(via_lch, green);
    }

    #[test]
    fn test_out_of_gamut_hex() {
        let vivid = Color::from_lch(LchModel::OkLch, 0.6, 0.35, 30.0);
        assert!(!vivid.within_srgb());

        // The hex fallback is a displayable color with the same hue.
        let hex = vivid.hex().to_string();
        assert!(hex.starts_with('#') && hex.len() == 7);
        assert_ne!(hex, "#000000");
        assert_ne!(hex, "#ffffff");
    }

    #[test]
    fn test_gamut_flags_nest() {
        let samples = [
            Color::from_lch(LchModel::OkLch, 0.6, 0.05, 30.0),
            Color::from_lch(LchModel::OkLch, 0.6, 0.25, 30.0),
            Color::from_lch(LchModel::OkLch, 0.6, 0.4, 30.0),
            Color::from_lch(LchModel::CieLch, 50.0, 80.0, 200.0),
        ];

        for color in &samples {
            assert!(!color.within_srgb() || color.within_p3(), "{:?}", color);
            assert!(!color.within_p3() || color.within_rec2020(), "{:?}", color);
        }
    }

    #[test]
    fn test_memoization() {
        let vivid = Color::from_lch(LchModel::OkLch, 0.6, 0.35, 30.0);
        assert_eq!(vivid.hex().as_ptr(), vivid.hex().as_ptr());
        assert_eq!(vivid.css().as_ptr(), vivid.css().as_ptr());
    }

    #[test]
    fn test_equality() {
        let color = Color::from_lch(LchModel::OkLch, 0.6, 0.1, 30.0);
        let rotated = Color::from_lch(LchModel::OkLch, 0.6, 0.1, 390.0);
        assert_eq!(color, rotated);

        let other_model = Color::from_lch(LchModel::CieLch, 0.6, 0.1, 30.0);
        assert_ne!(color, other_model);
    }
}
