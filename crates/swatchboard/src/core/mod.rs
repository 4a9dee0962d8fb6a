//! The numeric plumbing underneath swatchboard's public API.
//!
//! This module implements color literal parsing, color space conversion,
//! perceptual difference, and WCAG luminance math on plain value types. It is
//! private; [`crate::color`], [`crate::contrast`], and [`crate::naming`] wrap
//! its functions into the public surface.

mod contrast;
mod conversion;
mod difference;
mod parser;

pub(crate) use contrast::{contrast_ratio, relative_luminance};
pub(crate) use conversion::{
    oklab_to_oklch, oklab_to_rgba, oklch_to_oklab, rgba_to_hsla, rgba_to_oklab, to_hex,
};
pub(crate) use difference::{delta_e_ok, find_closest};
pub(crate) use parser::parse;
