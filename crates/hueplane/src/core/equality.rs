use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by reducing resolution and dropping the sign of negative zeros
/// and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::core::to_eq_bits(f1);
        let bits2 = $crate::core::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

#[cfg(test)]
pub(crate) use assert_close_enough;

/// Test macro for asserting that two coordinate triples describe the same
/// color.
///
/// Given two coordinate arrays and a flag marking the third coordinate as a
/// hue in degrees, this macro normalizes the coordinates by removing full
/// hue rotations, scaling the hue to unit range, reducing resolution, and
/// dropping the sign of negative zeros before comparing the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_triple {
    ($polar:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (polar, cs1, cs2) = ($polar, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_triple(polar, cs1);
        let bits2 = $crate::core::to_eq_triple(polar, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_triple;

/// Normalize a coordinate triple for equality testing.
///
/// If `polar` is true, the third coordinate is a hue in degrees; full
/// rotations are removed and the remainder is scaled to unit range so that
/// hues round at a resolution comparable to the other coordinates.
#[must_use = "function returns normalized bits and does not mutate original value"]
pub(crate) fn to_eq_triple(polar: bool, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, mut c3] = *coordinates;

    if polar {
        c3 = c3.rem_euclid(360.0) / 360.0;
    }

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Normalize a floating point number before equality testing.
///
/// This function reduces significant digits after the decimal and drops the
/// sign of negative zero, returning the result as a bit string.
#[inline]
pub(crate) fn to_eq_bits(f: Float) -> Bits {
    // Reduce precision.
    let mut f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}
