use crate::color::Color;
use crate::core::{max_chroma, parse, LchModel, ParsedColor, Ranges, RgbGamut};
use crate::Float;

/// A color space over a perceptual model.
///
/// The color space is the crate's facade. It binds a perceptual
/// [`LchModel`] and creates [`Color`] objects, either
/// [from perceptual coordinates](ColorSpace::from_perceptual) or by
/// [parsing a color string](ColorSpace::parse). It also answers boundary
/// queries for chart rendering, notably the
/// [largest in-gamut chroma](ColorSpace::max_chroma) at a given lightness
/// and hue.
///
/// Since a color space is just a model tag, the type is `Copy` and all
/// methods take `&self`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorSpace {
    model: LchModel,
}

/// Create the color space for the perceptual model.
pub const fn color_space(model: LchModel) -> ColorSpace {
    ColorSpace::new(model)
}

impl ColorSpace {
    /// Create a new color space for the perceptual model.
    pub const fn new(model: LchModel) -> Self {
        Self { model }
    }

    /// Access this color space's perceptual model.
    pub const fn model(&self) -> LchModel {
        self.model
    }

    /// Access the channel ranges of this color space's perceptual model.
    pub const fn ranges(&self) -> &'static Ranges {
        self.model.ranges()
    }

    /// Create a new color from perceptual lightness, chroma, and hue (in
    /// degrees).
    ///
    /// The coordinates need not be in range for any display gamut; the
    /// resulting color simply reports `false` from its gamut tests.
    pub fn from_perceptual(&self, lightness: Float, chroma: Float, hue: Float) -> Color {
        Color::from_lch(self.model, lightness, chroma, hue)
    }

    /// Parse the string into a color.
    ///
    /// This method recognizes three and six digit hashed hexadecimal colors
    /// as well as the CSS `color(display-p3 ...)` function. It returns
    /// `None` for all other inputs; the detailed
    /// [`ColorFormatError`](crate::error::ColorFormatError) is an internal
    /// concern.
    pub fn parse(&self, s: &str) -> Option<Color> {
        match parse(s).ok()? {
            ParsedColor::Srgb(units) => Some(Color::from_srgb_units(self.model, units)),
            ParsedColor::DisplayP3(units) => Some(Color::from_p3_units(self.model, units)),
        }
    }

    /// Find the largest chroma at the given lightness and hue (in degrees)
    /// that still falls within the gamut.
    pub fn max_chroma(&self, lightness: Float, hue: Float, gamut: RgbGamut) -> Float {
        max_chroma(self.model, lightness, hue, gamut)
    }

    /// Trace the gamut's boundary at constant lightness.
    ///
    /// The result has `samples` entries, each a hue in degrees paired with
    /// the largest in-gamut chroma at that hue. Hues are evenly spaced over
    /// `0..360`. Chart views overlay these curves to show how much of the
    /// chroma axis each display gamut covers.
    pub fn gamut_boundary(
        &self,
        lightness: Float,
        gamut: RgbGamut,
        samples: usize,
    ) -> Vec<[Float; 2]> {
        (0..samples)
            .map(|index| {
                let hue = 360.0 * index as Float / samples as Float;
                [hue, max_chroma(self.model, lightness, hue, gamut)]
            })
            .collect()
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.model.fmt(f)
    }
}

// ====================================================================================================================
