mod conversion;
mod equality;
mod gamut;
mod math;
mod model;
mod string;

// conversion
pub(crate) use conversion::{display_p3_to_xyz, srgb_to_xyz, xyz_to_display_p3, xyz_to_srgb};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_close_enough, assert_same_triple, to_eq_bits};
pub(crate) use equality::to_eq_triple;

// gamut
pub use gamut::RgbGamut;
pub(crate) use gamut::{in_gamut, map_into_gamut, max_chroma};

// math
pub(crate) use math::FloatExt;

// model
pub use model::{ChannelRange, LchModel, Ranges};

// string
pub(crate) use string::{format_css_p3, parse, srgb_to_hex, ParsedColor};
