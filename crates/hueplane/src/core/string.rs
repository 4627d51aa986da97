use crate::error::ColorFormatError;
use crate::Float;

/// A successfully parsed color string, as unit coordinates in the color
/// space the string named.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ParsedColor {
    Srgb([Float; 3]),
    DisplayP3([Float; 3]),
}

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates scaled to unit range. It
/// transparently handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[Float; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<Float, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        let n = if factor == 1 { 16 * n + n } else { n };

        Ok(n as Float / 255.0)
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Parse a color in the CSS `color()` format. The color space must be
/// `display-p3` and the coordinates must be space-separated numbers without
/// units including `%`.
fn parse_p3_function(s: &str) -> Result<[Float; 3], ColorFormatError> {
    // Munge CSS function name
    let rest = s
        .strip_prefix("color")
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    // Munge color space
    let body = rest
        .trim_start()
        .strip_prefix("display-p3")
        .ok_or(ColorFormatError::UnknownColorSpace)?;

    #[inline]
    fn parse_coordinate(s: Option<&str>, _: usize) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate)
            .and_then(|t| t.parse().map_err(|_| ColorFormatError::MalformedFloat))
    }

    // Munge coordinates. Iterator eats all leading or trailing white space.
    let mut iter = body.split_whitespace();
    let c1 = parse_coordinate(iter.next(), 0)?;
    let c2 = parse_coordinate(iter.next(), 1)?;
    let c3 = parse_coordinate(iter.next(), 2)?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

/// Parse the string into a color.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// format as well as the modern syntax for the `color(display-p3 ...)` CSS
/// function with space-separated arguments. Before trying to parse either
/// format, it trims leading and trailing white space and converts ASCII
/// letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<ParsedColor, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        parse_hashed(s).map(ParsedColor::Srgb)
    } else {
        parse_p3_function(s).map(ParsedColor::DisplayP3)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format in-gamut sRGB unit coordinates as a hashed hexadecimal string.
/// Out-of-range coordinates are clamped first.
pub(crate) fn srgb_to_hex(value: &[Float; 3]) -> String {
    #[inline]
    fn to_byte(value: Float) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(value[0]),
        to_byte(value[1]),
        to_byte(value[2])
    )
}

/// Format Display P3 unit coordinates as a CSS `color()` function.
///
/// Coordinates are rounded to four digits past the decimal and formatted
/// without trailing zeros, so that `[0.0, 1.0, 0.0]` becomes
/// `color(display-p3 0 1 0)`.
pub(crate) fn format_css_p3(value: &[Float; 3]) -> String {
    #[inline]
    fn round(value: Float) -> Float {
        (value * 1e4).round() / 1e4
    }

    format!(
        "color(display-p3 {} {} {})",
        round(value[0]),
        round(value[1]),
        round(value[2])
    )
}

// ====================================================================================================================
