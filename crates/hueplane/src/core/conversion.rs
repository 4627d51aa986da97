use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other,
/// producing a new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Decode gamma-corrected RGB coordinates to linear RGB using sRGB's
/// transfer function. Display P3 uses the very same function.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Encode linear RGB coordinates as gamma-corrected RGB using sRGB's
/// transfer function. Display P3 uses the very same function.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// The D65 white point, i.e., the XYZ coordinates of sRGB white.
///
/// The coordinates are the row sums of the linear sRGB to XYZ matrix, which
/// keeps the CIELAB transform consistent with the matrices used here.
#[allow(clippy::excessive_precision)]
pub(crate) const D65_WHITE: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

// --------------------------------------------------------------------------------------------------------------------

mod rec2020 {
    use crate::Float;

    #[allow(clippy::excessive_precision)]
    const ALPHA: Float = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const BETA: Float = 0.018053968510807;

    /// Encode linear Rec. 2020 coordinates with the Rec. 2020 transfer
    /// function.
    pub(super) fn linear_rec2020_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            if value < BETA {
                value * 4.5
            } else {
                ALPHA * value.powf(0.45) - (ALPHA - 1.0)
            }
        }

        [convert(value[0]), convert(value[1]), convert(value[2])]
    }
}

use rec2020::linear_rec2020_to_rec2020;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_REC2020: [[Float; 3]; 3] = [
    [  1.716651187971268,  -0.355670783776392, -0.253366281373660  ],
    [ -0.666684351832489,   1.616481236634939,  0.0157685458139111 ],
    [  0.017639857445311,  -0.042770613257809,  0.942103121235474  ],
];

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ.
#[inline]
pub(crate) fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    multiply(&LINEAR_SRGB_TO_XYZ, &linear_srgb)
}

/// Convert coordinates for XYZ to sRGB.
#[inline]
pub(crate) fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = multiply(&XYZ_TO_LINEAR_SRGB, value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Convert coordinates for Display P3 to XYZ.
#[inline]
pub(crate) fn display_p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = rgb_to_linear_rgb(value);
    multiply(&LINEAR_DISPLAY_P3_TO_XYZ, &linear_p3)
}

/// Convert coordinates for XYZ to Display P3.
#[inline]
pub(crate) fn xyz_to_display_p3(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value);
    linear_rgb_to_rgb(&linear_p3)
}

/// Convert coordinates for XYZ to Rec. 2020.
///
/// Rec. 2020 serves only as a gamut probe, so no inverse is provided.
#[inline]
pub(crate) fn xyz_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
    let linear_rec2020 = multiply(&XYZ_TO_LINEAR_REC2020, value);
    linear_rec2020_to_rec2020(&linear_rec2020)
}

// ====================================================================================================================
