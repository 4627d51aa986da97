//! Utility module with hueplane's errors.

/// An erroneous color format.
///
/// This error describes why a color string failed to parse. The facade's
/// [`parse`](crate::ColorSpace::parse) collapses it into an absent value,
/// since unparsable input is this crate's only user-visible failure mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that starts with neither `#` nor `color(`.
    UnknownFormat,

    /// A hexadecimal color with an unexpected number of characters. For
    /// example, `#ff` is missing a digit, whereas `#ff00ff00` has too many.
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening
    /// parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `color(display-p3 0 0 0` is missing the closing
    /// parenthesis.
    NoClosingParenthesis,

    /// A `color()` format naming a color space other than `display-p3`.
    UnknownColorSpace,

    /// A color format with fewer than three coordinates. For example,
    /// `color(display-p3 0.1 0.2)` is missing the third coordinate.
    MissingCoordinate,

    /// A color format with a malformed hexadecimal coordinate. For example,
    /// `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format with a malformed floating point coordinate. For
    /// example, `color(display-p3 0.1 0..2 0.3)` has a malformed second
    /// coordinate.
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `color(display-p3 1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#` or `color(display-p3`")
            }
            UnexpectedCharacters => {
                f.write_str("hexadecimal color should have 3 or 6 digits but does not")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should use the display-p3 color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
