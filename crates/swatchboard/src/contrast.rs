//! WCAG 2.x contrast computation and text color selection.
//!
//! Swatch labels render directly on top of swatch colors, so every swatch
//! needs a text color that remains legible against its background. This
//! module picks between the two fixed candidates, [`DARK_TEXT`] and
//! [`LIGHT_TEXT`], by maximizing the WCAG contrast ratio. It also exposes
//! the underlying luminance and ratio computations and the conformance
//! thresholds of the guidelines.

use crate::color::Rgba;
use crate::core;
use crate::Float;

/// The dark text color, a near-black that reads softer than pure black on
/// bright swatches.
pub const DARK_TEXT: &str = "#111111";

/// The light text color, pure white.
pub const LIGHT_TEXT: &str = "#FFFFFF";

const DARK_TEXT_RGBA: Rgba = Rgba { r: 0x11, g: 0x11, b: 0x11, a: 1.0 };

/// Compute the relative luminance of the color per WCAG 2.x. Alpha is
/// ignored.
pub fn relative_luminance(color: &Rgba) -> Float {
    core::relative_luminance(color)
}

/// Compute the WCAG contrast ratio between the two colors. The ratio ranges
/// from 1 for identical luminance to 21 for black on white and is symmetric
/// in its arguments.
///
/// ```
/// # use swatchboard::contrast::contrast_ratio;
/// # use swatchboard::Rgba;
/// let ratio = contrast_ratio(&Rgba::BLACK, &Rgba::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(color1: &Rgba, color2: &Rgba) -> Float {
    core::contrast_ratio(core::relative_luminance(color1), core::relative_luminance(color2))
}

/// Select the text color for the given background color.
///
/// The candidate with the higher contrast ratio against the background wins;
/// on a tie, dark text does.
pub fn text_color_for(background: &Rgba) -> &'static str {
    let luminance = core::relative_luminance(background);
    let against_dark = core::contrast_ratio(luminance, core::relative_luminance(&DARK_TEXT_RGBA));
    let against_light = core::contrast_ratio(luminance, core::relative_luminance(&Rgba::WHITE));

    if against_light > against_dark {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Select the text color for the given background color literal.
///
/// This function cannot fail. If the literal does not parse, it returns
/// [`DARK_TEXT`], since boards most often render on light surfaces and dark
/// text is the safer default there.
///
/// ```
/// # use swatchboard::contrast::{text_color, DARK_TEXT, LIGHT_TEXT};
/// assert_eq!(text_color("#000000"), LIGHT_TEXT);
/// assert_eq!(text_color("#FFFFFF"), DARK_TEXT);
/// assert_eq!(text_color("#FF6600"), DARK_TEXT);
/// assert_eq!(text_color("not-a-color"), DARK_TEXT);
/// ```
pub fn text_color(background: &str) -> &'static str {
    core::parse(background).map_or(DARK_TEXT, |color| text_color_for(&color))
}

// --------------------------------------------------------------------------------------------------------------------

/// A WCAG 2.x conformance level for text contrast.
///
/// Each level carries the minimum contrast ratio the guidelines require.
/// "Large" text is at least 18 point, or 14 point bold.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// Level AA for large text, requiring a ratio of at least 3.
    AaLarge,
    /// Level AA, requiring a ratio of at least 4.5.
    Aa,
    /// Level AAA for large text, requiring a ratio of at least 4.5.
    AaaLarge,
    /// Level AAA, requiring a ratio of at least 7.
    Aaa,
}

impl WcagLevel {
    /// The minimum contrast ratio required by this level.
    pub const fn threshold(&self) -> Float {
        match self {
            WcagLevel::AaLarge => 3.0,
            WcagLevel::Aa | WcagLevel::AaaLarge => 4.5,
            WcagLevel::Aaa => 7.0,
        }
    }

    /// Determine whether the given contrast ratio meets this level.
    pub fn is_met(&self, ratio: Float) -> bool {
        self.threshold() <= ratio
    }
}

// ====================================================================================================================
