use crate::core::conversion::{multiply, D65_WHITE};
use crate::Float;

/// The valid range of one perceptual channel.
///
/// The bounds, step granularity, and display precision describe the useful
/// range for UI callers such as sliders and numeric inputs. The converters
/// themselves do not enforce them; out-of-range values still convert,
/// possibly to out-of-gamut results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    pub min: Float,
    pub max: Float,
    pub step: Float,
    /// Decimal places to display.
    pub precision: u8,
}

/// The channel ranges of a perceptual model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranges {
    pub l: ChannelRange,
    pub c: ChannelRange,
    pub h: ChannelRange,
}

#[rustfmt::skip]
const CIELCH_RANGES: Ranges = Ranges {
    l: ChannelRange { min: 0.0, max: 100.0, step: 0.5, precision: 1 },
    c: ChannelRange { min: 0.0, max: 150.0, step: 0.5, precision: 1 },
    h: ChannelRange { min: 0.0, max: 360.0, step: 0.5, precision: 1 },
};

#[rustfmt::skip]
const OKLCH_RANGES: Ranges = Ranges {
    l: ChannelRange { min: 0.0, max: 1.0, step: 0.005, precision: 3 },
    c: ChannelRange { min: 0.0, max: 0.4, step: 0.005, precision: 3 },
    h: ChannelRange { min: 0.0, max: 360.0, step: 0.5, precision: 1 },
};

// --------------------------------------------------------------------------------------------------------------------

/// The enumeration of supported perceptual color models.
///
/// Both models are cylindrical lightness/chroma/hue spaces over a Cartesian
/// base:
///
///   * [`CieLch`](LchModel::CieLch) is CIE 1976 L\*C\*h\*, the polar form of
///     CIELAB, with lightness `0..=100` and chroma on the order of `0..150`.
///   * [`OkLch`](LchModel::OkLch) is the polar form of
///     [Oklab](https://bottosson.github.io/posts/oklab/), with lightness
///     `0..=1` and chroma in practice bounded by `0.4`.
///
/// Every variant provides a total transform to and from XYZ D65. The two
/// directions are mutually inverse up to floating point tolerance. Physically
/// meaningless inputs, say, negative lightness, still transform numerically.
///
/// The enum replaces a name-keyed model registry: adding a model extends a
/// closed set that every `match` checks exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LchModel {
    CieLch,
    OkLch,
}

impl LchModel {
    /// Access this model's channel ranges.
    pub const fn ranges(&self) -> &'static Ranges {
        match *self {
            Self::CieLch => &CIELCH_RANGES,
            Self::OkLch => &OKLCH_RANGES,
        }
    }

    /// Convert lightness, chroma, and hue (in degrees) to XYZ D65.
    pub fn lch_to_xyz(&self, value: &[Float; 3]) -> [Float; 3] {
        match *self {
            Self::CieLch => cielab::lab_to_xyz(&lch_to_lab(value)),
            Self::OkLch => oklab::oklab_to_xyz(&lch_to_lab(value)),
        }
    }

    /// Convert XYZ D65 to lightness, chroma, and hue (in degrees).
    ///
    /// Near the achromatic axis the hue angle is numerically meaningless, so
    /// this method reports chroma 0 and the 0° sentinel hue instead.
    pub fn xyz_to_lch(&self, value: &[Float; 3]) -> [Float; 3] {
        match *self {
            Self::CieLch => lab_to_lch(&cielab::xyz_to_lab(value), CIELAB_ACHROMATIC_EPSILON),
            Self::OkLch => lab_to_lch(&oklab::xyz_to_oklab(value), OKLAB_ACHROMATIC_EPSILON),
        }
    }
}

impl std::fmt::Display for LchModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::CieLch => "CIELCh",
            Self::OkLch => "OKLCh",
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

const OKLAB_ACHROMATIC_EPSILON: Float = 0.0002;
// CIELAB's a/b axes span roughly ±100 rather than Oklab's ±0.4.
const CIELAB_ACHROMATIC_EPSILON: Float = 0.02;

/// Convert polar lightness/chroma/hue coordinates to the Cartesian form
/// shared by CIELAB and Oklab.
#[allow(non_snake_case)]
fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

/// Convert Cartesian lightness/a/b coordinates to the polar form. Colors
/// within `epsilon` of the achromatic axis map to chroma 0 and hue 0.
#[allow(non_snake_case)]
fn lab_to_lch(value: &[Float; 3], epsilon: Float) -> [Float; 3] {
    let [L, a, b] = *value;

    let a_m = a.abs();
    if a_m < epsilon && b.abs() < epsilon {
        return [L, 0.0, 0.0];
    }

    // hypot is more accurate with the larger magnitude second
    let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use super::D65_WHITE;
    use crate::Float;

    #[allow(clippy::excessive_precision)]
    const EPSILON: Float = 216.0 / 24389.0;
    #[allow(clippy::excessive_precision)]
    const KAPPA: Float = 24389.0 / 27.0;

    /// Convert coordinates for XYZ D65 to CIELAB.
    pub(super) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f(t: Float) -> Float {
            if t > EPSILON {
                t.cbrt()
            } else {
                KAPPA.mul_add(t, 16.0) / 116.0
            }
        }

        let fx = f(value[0] / D65_WHITE[0]);
        let fy = f(value[1] / D65_WHITE[1]);
        let fz = f(value[2] / D65_WHITE[2]);

        [
            116.0 * fy - 16.0,
            500.0 * (fx - fy),
            200.0 * (fy - fz),
        ]
    }

    /// Convert coordinates for CIELAB to XYZ D65.
    #[allow(non_snake_case)]
    pub(super) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let fy = (L + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        #[inline]
        fn f_inverse(t: Float) -> Float {
            let t3 = t * t * t;
            if t3 > EPSILON {
                t3
            } else {
                (116.0 * t - 16.0) / KAPPA
            }
        }

        let xr = f_inverse(fx);
        let yr = if L > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            L / KAPPA
        };
        let zr = f_inverse(fz);

        [
            xr * D65_WHITE[0],
            yr * D65_WHITE[1],
            zr * D65_WHITE[2],
        ]
    }
}

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use super::multiply;
    use crate::Float;

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
        [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
        [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
        [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
        [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
        [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
        [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
    ];

    /// Convert coordinates for Oklab to XYZ, through two matrix
    /// multiplications with a coordinate-wise cube in between.
    pub(super) fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
        multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
    }

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
        [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
        [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
        [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
        [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
        [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
        [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
    ];

    /// Convert coordinates for XYZ to Oklab, through two matrix
    /// multiplications with a coordinate-wise cube root in between.
    pub(super) fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
        let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
        multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
    }
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::LchModel;
    use crate::core::conversion::srgb_to_xyz;
    use crate::core::equality::assert_same_triple;
    use crate::Float;

    // XYZ and OKLCh representations of #ffca00 and #3178ea, with the
    // achromatic endpoints for good measure.
    const YELLOW_XYZ: [Float; 3] = [0.6235868473237722, 0.635031101987136, 0.08972950140152941];
    const YELLOW_OKLCH: [Float; 3] = [0.8613332073307732, 0.1760097742886813, 89.440876452466];

    const BLUE_XYZ: [Float; 3] = [0.22832473003420622, 0.20025321836938534, 0.80506528557483];
    const BLUE_OKLCH: [Float; 3] = [0.5909012953108558, 0.18665606306724153, 259.66681920272595];

    const WHITE_XYZ: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];

    #[test]
    fn test_oklch() {
        let oklch = LchModel::OkLch;

        assert_same_triple!(true, &oklch.xyz_to_lch(&YELLOW_XYZ), &YELLOW_OKLCH);
        assert_same_triple!(false, &oklch.lch_to_xyz(&YELLOW_OKLCH), &YELLOW_XYZ);

        assert_same_triple!(true, &oklch.xyz_to_lch(&BLUE_XYZ), &BLUE_OKLCH);
        assert_same_triple!(false, &oklch.lch_to_xyz(&BLUE_OKLCH), &BLUE_XYZ);
    }

    #[test]
    fn test_achromatic_sentinel() {
        let [l, c, h] = LchModel::OkLch.xyz_to_lch(&WHITE_XYZ);
        assert!((l - 1.0).abs() < 1e-9, "white lightness off: {}", l);
        assert_eq!(c, 0.0, "white chroma should use the sentinel");
        assert_eq!(h, 0.0, "white hue should use the sentinel");

        let [l, c, h] = LchModel::CieLch.xyz_to_lch(&WHITE_XYZ);
        assert!((l - 100.0).abs() < 1e-9, "white L* off: {}", l);
        assert_eq!(c, 0.0, "white chroma should use the sentinel");
        assert_eq!(h, 0.0, "white hue should use the sentinel");

        let [l, c, h] = LchModel::CieLch.xyz_to_lch(&[0.0, 0.0, 0.0]);
        assert!(l.abs() < 1e-12, "black L* off: {}", l);
        assert_eq!(c, 0.0, "black chroma should use the sentinel");
        assert_eq!(h, 0.0, "black hue should use the sentinel");
    }

    #[test]
    fn test_cielch_mid_gray() {
        let xyz = srgb_to_xyz(&[0.5, 0.5, 0.5]);
        let [l, c, _] = LchModel::CieLch.xyz_to_lch(&xyz);
        assert!((l - 53.39).abs() < 0.05, "mid-gray L* off: {}", l);
        assert_eq!(c, 0.0, "mid-gray chroma should use the sentinel");
    }

    #[test]
    fn test_round_trips() {
        let cases: [(LchModel, [[Float; 3]; 3]); 2] = [
            (
                LchModel::CieLch,
                [[30.0, 70.0, 300.0], [60.0, 40.0, 120.0], [95.0, 15.0, 30.0]],
            ),
            (
                LchModel::OkLch,
                [[0.3, 0.1, 300.0], [0.6, 0.12, 120.0], [0.95, 0.05, 30.0]],
            ),
        ];

        for (model, triples) in &cases {
            for lch in triples {
                let there_and_back = model.xyz_to_lch(&model.lch_to_xyz(lch));
                for (index, (a, b)) in lch.iter().zip(&there_and_back).enumerate() {
                    assert!(
                        (a - b).abs() < 1e-9,
                        "{} round trip diverges at {}: {:?} vs {:?}",
                        model,
                        index,
                        lch,
                        there_and_back
                    );
                }
            }
        }
    }

    #[test]
    fn test_ranges() {
        let cielch = LchModel::CieLch.ranges();
        assert_eq!(cielch.l.max, 100.0, "CIELCh lightness tops out at 100");
        assert_eq!(cielch.c.max, 150.0, "CIELCh chroma tops out at 150");

        let oklch = LchModel::OkLch.ranges();
        assert_eq!(oklch.l.max, 1.0, "OKLCh lightness tops out at 1");
        assert_eq!(oklch.c.max, 0.4, "OKLCh chroma tops out at 0.4");
        assert_eq!(oklch.h.max, 360.0, "hue wraps at 360 degrees");
    }
}
