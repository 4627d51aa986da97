//! # Hueplane
//!
//! Hueplane is the numeric core of a perceptual palette tool: conversions
//! between the CIELCh and OKLCh color models, the sRGB, Display P3, and
//! Rec. 2020 device color spaces, and CIE XYZ (D65) as the shared
//! intermediate, together with gamut testing and gamut mapping.
//!
//! The main abstractions are:
//!
//!   * [`LchModel`] enumerates the supported perceptual models and provides
//!     each model's transform to and from XYZ as well as its channel
//!     [`Ranges`] for UI sliders.
//!   * [`ColorSpace`] binds one model to the shared converters and the gamut
//!     mapper. Its two entry points are [`ColorSpace::parse`], which accepts
//!     hexadecimal sRGB strings and the CSS `color(display-p3 r g b)`
//!     notation, and [`ColorSpace::from_perceptual`], which is total.
//!   * [`Color`] is the immutable result record: the perceptual triple, the
//!     sRGB and Display P3 channels, the nested gamut flags, and lazily
//!     memoized `hex`/`css` strings. An out-of-gamut color's `hex` is the
//!     nearest in-gamut color at the same lightness and hue.
//!   * [`ChartSettings`] models the host application's display preferences
//!     as an explicit configuration struct.
//!
//! All operations are pure, synchronous computations on small numeric
//! triples and are safe to call concurrently.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
pub mod error;
mod settings;
mod space;

pub use color::Color;
pub use core::{ChannelRange, LchModel, Ranges, RgbGamut};
pub use settings::ChartSettings;
pub use space::{color_space, ColorSpace};
