use crate::color::Color;
use crate::core::{LchModel, RgbGamut};

/// Presentation settings for palette charts.
///
/// The settings bundle the per-chart toggles of a palette editor: whether
/// cells render in color at all, which wide-gamut boundary curves to
/// overlay, whether output is forced into sRGB for screenshots and exports,
/// and which perceptual model the chart axes use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChartSettings {
    /// Render chart cells in color rather than neutral gray.
    pub show_colors: bool,
    /// Overlay the Display P3 gamut boundary.
    pub show_p3_boundary: bool,
    /// Overlay the Rec. 2020 gamut boundary.
    pub show_rec2020_boundary: bool,
    /// Force all output colors into sRGB, even on wide-gamut displays.
    pub force_srgb: bool,
    /// The perceptual model for the chart axes.
    pub model: LchModel,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            show_colors: true,
            show_p3_boundary: false,
            show_rec2020_boundary: false,
            force_srgb: false,
            model: LchModel::OkLch,
        }
    }
}

impl ChartSettings {
    /// The string to display the color with under these settings.
    ///
    /// With [`force_srgb`](ChartSettings::force_srgb) set, that is always
    /// the gamut-mapped hexadecimal string. Otherwise wide-gamut colors keep
    /// their `color(display-p3 ...)` form.
    pub fn display_string<'a>(&self, color: &'a Color) -> &'a str {
        if self.force_srgb {
            color.hex()
        } else {
            color.css()
        }
    }

    /// The gamut boundaries to overlay, from smallest to largest.
    pub fn visible_boundaries(&self) -> Vec<RgbGamut> {
        let mut boundaries = Vec::new();
        if self.show_p3_boundary {
            boundaries.push(RgbGamut::DisplayP3);
        }
        if self.show_rec2020_boundary {
            boundaries.push(RgbGamut::Rec2020);
        }
        boundaries
    }

    /// Switch to the other perceptual model.
    pub fn toggle_model(&mut self) {
        self.model = match self.model {
            LchModel::CieLch => LchModel::OkLch,
            LchModel::OkLch => LchModel::CieLch,
        };
    }
}

// ====================================================================================================================
