//! # Swatchboard
//!
//! This crate is the color science and naming core behind palette board
//! images. It turns loosely formatted color literals into fully normalized
//! colors, selects legible text colors, names colors the way a person
//! would, and packs the results into finished palettes:
//!
//!   * [`parse_color`] and [`NormalizedColor`] parse hex, `rgb()`, and
//!     `hsl()` literals and derive the HSLA, OKLab, and OKLCh
//!     representations;
//!   * [`contrast`] computes WCAG 2.x luminance and contrast ratios and
//!     picks between dark and light label text;
//!   * [`naming`] labels colors by their perceptually nearest well-known
//!     color in OKLab, synthesizing descriptive names such as "Light Muted
//!     Teal" where nothing is close enough;
//!   * [`palette`] ties the stages together, ordering, naming, and indexing
//!     a palette's worth of swatches in one deterministic pass.
//!
//! Rendering the actual board image, SVG or raster, is a host concern and
//! out of scope here.
//!
//!
//! ## One example
//!
//! ```
//! use swatchboard::palette::{build_palette, PaletteOptions};
//!
//! let palette = build_palette(
//!     ["#FF6600", "rgb(30, 144, 255)", "#FF6600"],
//!     &PaletteOptions::default(),
//! )?;
//!
//! for swatch in &palette {
//!     assert!(!swatch.name().is_empty());
//!     assert!(swatch.text_color().starts_with('#'));
//! }
//! // Identical swatches still get distinct labels.
//! assert_ne!(palette[0].name(), palette[2].name());
//! # Ok::<(), swatchboard::error::ColorFormatError>(())
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #ff6600;"></div>
//! <div style="background-color: #1e90ff;"></div>
//! </div>
//!
//!
//! ## Features
//!
//! This crate has two features:
//!
//!   * `f64` (enabled by default): use [`f64`] as [`Float`], with [`u64`]
//!     as [`Bits`]. Without this feature, the crate falls back onto [`f32`]
//!     and [`u32`].
//!   * `serde` (disabled by default): derive serde's `Serialize` and
//!     `Deserialize` for the public value types.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The unsigned integer with the same bit width as [`Float`].
#[cfg(feature = "f64")]
pub type Bits = u64;

/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;
/// The unsigned integer with the same bit width as [`Float`].
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
pub mod contrast;
mod core;
pub mod error;
pub mod naming;
pub mod palette;

pub use color::{parse_color, Hsla, NormalizedColor, OkLab, OkLch, Rgba};

/// Assert that the two floating point numbers are within tolerance of each
/// other. Without an explicit tolerance, this macro uses `1e-6`, which is
/// tight enough for color coordinates at either floating point width.
#[macro_export]
macro_rules! assert_close_enough {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_close_enough!($left, $right, 1e-6)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right) = ($left, $right);
        let difference = (left as f64 - right as f64).abs();
        assert!(
            difference <= $tolerance,
            "assertion `left ≈ right` failed\n  left: {left:?}\n right: {right:?}\n  diff: {difference:?}"
        );
    }};
}
