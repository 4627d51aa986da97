use crate::core::conversion::{xyz_to_display_p3, xyz_to_rec2020, xyz_to_srgb};
use crate::core::model::LchModel;
use crate::Float;

/// The tolerance for gamut membership. Coordinates within this distance of
/// the unit range still count as in gamut, which absorbs the floating point
/// noise of a conversion round trip right at the gamut boundary.
pub(crate) const GAMUT_EPSILON: Float = 1e-4;

/// The maximum number of bisection steps when searching the gamut boundary.
const MAX_MAPPING_STEPS: usize = 32;

/// The chroma resolution at which the boundary search stops.
const CHROMA_TOLERANCE: Float = 1e-4;

/// Determine whether the coordinates are in gamut for their RGB color space,
/// within [`GAMUT_EPSILON`].
pub(crate) fn in_gamut(value: &[Float; 3]) -> bool {
    value
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// Clip the coordinates to gamut for their RGB color space.
pub(crate) fn clip(value: &[Float; 3]) -> [Float; 3] {
    [
        value[0].clamp(0.0, 1.0),
        value[1].clamp(0.0, 1.0),
        value[2].clamp(0.0, 1.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// The enumeration of RGB gamuts this crate can test membership against.
///
/// The variants are ordered from smallest to largest gamut; sRGB is a strict
/// subset of Display P3, which is a strict subset of Rec. 2020.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RgbGamut {
    Srgb,
    DisplayP3,
    Rec2020,
}

impl RgbGamut {
    /// Convert XYZ D65 coordinates to this gamut's gamma-corrected units.
    pub(crate) fn from_xyz(&self, value: &[Float; 3]) -> [Float; 3] {
        match *self {
            Self::Srgb => xyz_to_srgb(value),
            Self::DisplayP3 => xyz_to_display_p3(value),
            Self::Rec2020 => xyz_to_rec2020(value),
        }
    }

    /// Determine whether the XYZ D65 coordinates fall within this gamut.
    pub(crate) fn contains(&self, value: &[Float; 3]) -> bool {
        in_gamut(&self.from_xyz(value))
    }
}

impl std::fmt::Display for RgbGamut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::Srgb => "sRGB",
            Self::DisplayP3 => "Display P3",
            Self::Rec2020 => "Rec. 2020",
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Map the perceptual coordinates into the gamut, returning the gamut's
/// gamma-corrected units.
///
/// The mapping reduces chroma while holding lightness and hue fixed, using
/// bisection to find the largest still-in-gamut chroma. If even the
/// achromatic version of the color falls outside the gamut, which happens
/// for out-of-range lightness, chroma reduction cannot help and the result
/// is the clipped achromatic color. The returned coordinates are always in
/// gamut.
pub(crate) fn map_into_gamut(model: LchModel, gamut: RgbGamut, lch: &[Float; 3]) -> [Float; 3] {
    let units = gamut.from_xyz(&model.lch_to_xyz(lch));
    if in_gamut(&units) {
        return clip(&units);
    }

    let [l, c, h] = *lch;

    let achromatic = gamut.from_xyz(&model.lch_to_xyz(&[l, 0.0, h]));
    if !in_gamut(&achromatic) {
        return clip(&achromatic);
    }

    let mut lo = 0.0;
    let mut hi = c;
    let mut best = achromatic;

    for _ in 0..MAX_MAPPING_STEPS {
        if hi - lo <= CHROMA_TOLERANCE {
            break;
        }

        let mid = 0.5 * (lo + hi);
        let candidate = gamut.from_xyz(&model.lch_to_xyz(&[l, mid, h]));
        if in_gamut(&candidate) {
            best = candidate;
            lo = mid;
        } else {
            hi = mid;
        }
    }

    clip(&best)
}

/// Find the largest chroma at the given lightness and hue that still falls
/// within the gamut.
///
/// The search bisects between zero chroma and the model's chroma ceiling.
/// If the achromatic color itself is out of gamut, the result is 0. If even
/// the ceiling is in gamut, the result is the ceiling.
pub(crate) fn max_chroma(model: LchModel, lightness: Float, hue: Float, gamut: RgbGamut) -> Float {
    if !gamut.contains(&model.lch_to_xyz(&[lightness, 0.0, hue])) {
        return 0.0;
    }

    let ceiling = model.ranges().c.max;
    if gamut.contains(&model.lch_to_xyz(&[lightness, ceiling, hue])) {
        return ceiling;
    }

    let mut lo = 0.0;
    let mut hi = ceiling;

    for _ in 0..MAX_MAPPING_STEPS {
        if hi - lo <= CHROMA_TOLERANCE {
            break;
        }

        let mid = 0.5 * (lo + hi);
        if gamut.contains(&model.lch_to_xyz(&[lightness, mid, hue])) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::conversion::{display_p3_to_xyz, srgb_to_xyz};

    #[test]
    fn test_membership() {
        // #ffca00 sits right on the sRGB boundary.
        let yellow = srgb_to_xyz(&[1.0, 0.792156862745098, 0.0]);
        assert!(RgbGamut::Srgb.contains(&yellow));
        assert!(RgbGamut::DisplayP3.contains(&yellow));
        assert!(RgbGamut::Rec2020.contains(&yellow));

        // P3 green is out of sRGB but within the wider gamuts.
        let p3_green = display_p3_to_xyz(&[0.0, 1.0, 0.0]);
        assert!(!RgbGamut::Srgb.contains(&p3_green));
        assert!(RgbGamut::DisplayP3.contains(&p3_green));
        assert!(RgbGamut::Rec2020.contains(&p3_green));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(&[-0.1, 0.5, 1.2]), [0.0, 0.5, 1.0]);
        assert_eq!(clip(&[0.0, 1.0, 0.25]), [0.0, 1.0, 0.25]);
    }

    #[test]
    fn test_map_into_gamut() {
        // A vivid orange outside of sRGB.
        let lch = [0.6, 0.35, 30.0];
        assert!(!RgbGamut::Srgb.contains(&LchModel::OkLch.lch_to_xyz(&lch)));

        let mapped = map_into_gamut(LchModel::OkLch, RgbGamut::Srgb, &lch);
        assert!(mapped.iter().all(|c| (0.0..=1.0).contains(c)));

        let [l, c, h] = LchModel::OkLch.xyz_to_lch(&srgb_to_xyz(&mapped));
        assert!((l - lch[0]).abs() < 0.01, "lightness drifted: {}", l);
        assert!((h - lch[2]).abs() < 0.5, "hue drifted: {}", h);
        assert!(c < lch[1], "chroma did not shrink: {}", c);
        assert!(c > 0.0, "chroma collapsed to zero");
    }

    #[test]
    fn test_map_in_gamut_is_identity() {
        let lch = [0.6, 0.05, 30.0];
        let direct = clip(&xyz_to_srgb(&LchModel::OkLch.lch_to_xyz(&lch)));
        let mapped = map_into_gamut(LchModel::OkLch, RgbGamut::Srgb, &lch);
        assert_eq!(mapped, direct);
    }

    #[test]
    fn test_map_out_of_range_lightness() {
        // No chroma reduction recovers L* above 100; the mapper clips.
        let mapped = map_into_gamut(LchModel::CieLch, RgbGamut::Srgb, &[120.0, 50.0, 0.0]);
        assert_eq!(mapped, [1.0, 1.0, 1.0]);

        // Closer to the gamut, clipping the chromatic input would yield a
        // tinted color; the mapper must still return the achromatic one.
        let mapped = map_into_gamut(LchModel::CieLch, RgbGamut::Srgb, &[110.0, 60.0, 30.0]);
        assert_eq!(mapped, [1.0, 1.0, 1.0]);
        assert_ne!(
            mapped,
            clip(&xyz_to_srgb(&LchModel::CieLch.lch_to_xyz(&[110.0, 60.0, 30.0])))
        );
    }

    #[test]
    fn test_chroma_sweep_stays_in_gamut() {
        // Sweeping chroma downward at fixed lightness and hue enters the
        // gamut once and never leaves it again.
        let mut entered = false;
        for step in (0..=80).rev() {
            let chroma = 0.4 * step as Float / 80.0;
            let contained =
                RgbGamut::Srgb.contains(&LchModel::OkLch.lch_to_xyz(&[0.6, chroma, 30.0]));
            if entered {
                assert!(contained, "left gamut again at chroma {}", chroma);
            }
            entered = entered || contained;
        }
        assert!(entered);
    }

    #[test]
    fn test_max_chroma() {
        let srgb = max_chroma(LchModel::OkLch, 0.6, 30.0, RgbGamut::Srgb);
        let p3 = max_chroma(LchModel::OkLch, 0.6, 30.0, RgbGamut::DisplayP3);
        let rec2020 = max_chroma(LchModel::OkLch, 0.6, 30.0, RgbGamut::Rec2020);

        assert!(srgb > 0.0);
        assert!(srgb <= p3 + CHROMA_TOLERANCE, "{} vs {}", srgb, p3);
        assert!(p3 <= rec2020 + CHROMA_TOLERANCE, "{} vs {}", p3, rec2020);

        // The result sits on the boundary.
        assert!(RgbGamut::Srgb.contains(&LchModel::OkLch.lch_to_xyz(&[0.6, srgb, 30.0])));
        assert!(!RgbGamut::Srgb.contains(&LchModel::OkLch.lch_to_xyz(&[0.6, srgb + 0.01, 30.0])));
    }

    #[test]
    fn test_max_chroma_out_of_range_lightness() {
        assert_eq!(max_chroma(LchModel::CieLch, 120.0, 0.0, RgbGamut::Srgb), 0.0);
    }
}
