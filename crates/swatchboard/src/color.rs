//! Swatchboard's color value types.

use std::str::FromStr;

use crate::core;
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color with an alpha component in unit range.
///
/// This is the canonical representation of a swatch color. Every parse
/// produces one, and every derived representation is computed from one.
/// Channels are 8-bit on purpose: the supported notations cannot express
/// more precision, and quantizing right after the parse keeps equality and
/// hex serialization trivial.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Float,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 1.0 };
    /// Opaque white.
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 1.0 };

    /// Create a new color from the given channels, clamping alpha to unit
    /// range.
    pub fn new(r: u8, g: u8, b: u8, alpha: Float) -> Self {
        Self {
            r,
            g,
            b,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Format this color in hashed hexadecimal notation with uppercase
    /// digits. The alpha pair appears only if the color is translucent.
    ///
    /// ```
    /// # use swatchboard::Rgba;
    /// assert_eq!(Rgba::new(255, 102, 0, 1.0).to_hex(), "#FF6600");
    /// assert_eq!(Rgba::new(255, 102, 0, 0.5).to_hex(), "#FF660080");
    /// ```
    pub fn to_hex(&self) -> String {
        core::to_hex(self)
    }

    /// Convert this color to its HSLA representation, with hue in whole
    /// degrees and saturation and lightness in whole percentage points.
    pub fn to_hsla(&self) -> Hsla {
        core::rgba_to_hsla(self)
    }

    /// Convert this color to OKLab.
    pub fn to_oklab(&self) -> OkLab {
        core::rgba_to_oklab(self)
    }

    /// Convert this color to OKLCh.
    pub fn to_oklch(&self) -> OkLch {
        core::rgba_to_oklab(self).to_oklch()
    }
}

impl FromStr for Rgba {
    type Err = ColorFormatError;

    /// Parse the string as a color literal; see [`parse_color`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a color literal into an RGBA color.
///
/// The supported syntaxes are hashed hexadecimal with 3, 4, 6, or 8 digits,
/// bare hexadecimal without the hash, and the functional `rgb()` and `hsl()`
/// notations with either comma- or space-separated components and an
/// optional alpha component. Parsing is case-insensitive and tolerates
/// surrounding white space. Out-of-range channels are clamped rather than
/// rejected; structurally malformed input is an error.
///
/// ```
/// # use swatchboard::{parse_color, Rgba};
/// # use swatchboard::error::ColorFormatError;
/// assert_eq!(parse_color("rgb(300, 102, 0)")?, Rgba::new(255, 102, 0, 1.0));
/// assert_eq!(parse_color("#F60")?, Rgba::new(255, 102, 0, 1.0));
/// assert_eq!(parse_color("hsl(0.5turn 100% 50%)")?, Rgba::new(0, 255, 255, 1.0));
/// assert!(parse_color("not-a-color").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #ff6600;"></div>
/// </div>
pub fn parse_color(s: &str) -> Result<Rgba, ColorFormatError> {
    core::parse(s).ok_or_else(|| ColorFormatError::new(s))
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in HSL representation, plus alpha.
///
/// Hue is in whole degrees `0..360`, saturation and lightness in whole
/// percentage points `0..=100`. The integral coordinates are the displayed
/// rendition of a swatch and intentionally lossy; converting back to RGBA
/// need not reproduce the original channels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: u16,
    pub s: u8,
    pub l: u8,
    pub a: Float,
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in the OKLab color space.
///
/// OKLab is perceptually uniform, which makes the Euclidean distance between
/// two coordinates, [`OkLab::distance`], a meaningful measure of how
/// different the colors look. Swatchboard performs all perceptual
/// computation, notably nearest-neighbor naming, in this space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OkLab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl OkLab {
    /// Access the coordinates as an array.
    pub(crate) const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }

    /// Compute the perceptual distance to the other color, the Euclidean
    /// distance in OKLab also known as ΔEOK.
    pub fn distance(&self, other: &OkLab) -> Float {
        core::delta_e_ok(&self.coordinates(), &other.coordinates())
    }

    /// Convert to the polar OKLCh form.
    pub fn to_oklch(&self) -> OkLch {
        core::oklab_to_oklch(self)
    }

    /// Convert to gamma-corrected sRGB with the given alpha, clamping
    /// out-of-gamut coordinates into range.
    pub fn to_rgba(&self, alpha: Float) -> Rgba {
        core::oklab_to_rgba(self, alpha)
    }
}

/// A color in the polar OKLCh color space.
///
/// Lightness and chroma are carried over from OKLab; the hue angle is in
/// degrees `0..360`. The polar form directly exposes the quantities the
/// fallback name synthesis buckets on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OkLch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl OkLch {
    /// Convert to the rectangular OKLab form.
    pub fn to_oklab(&self) -> OkLab {
        core::oklch_to_oklab(self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A parsed color together with all of its derived representations.
///
/// Normalization parses the input once and then eagerly computes the hex
/// serialization, HSLA rendition, and OKLab/OKLCh coordinates, so that
/// downstream stages never parse or convert again. The fields are private
/// and the accessors return immutable views; a normalized color is a fact,
/// not a builder.
///
/// ```
/// # use swatchboard::NormalizedColor;
/// # use swatchboard::error::ColorFormatError;
/// let color = NormalizedColor::new("rgb(255, 102, 0)")?;
/// assert_eq!(color.hex(), "#FF6600");
/// assert_eq!(color.hsla().h, 24);
/// assert_eq!(color.input(), "rgb(255, 102, 0)");
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #ff6600;"></div>
/// </div>
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedColor {
    input: String,
    rgba: Rgba,
    hex: String,
    hsla: Hsla,
    oklab: OkLab,
    oklch: OkLch,
}

impl NormalizedColor {
    /// Normalize the given color literal.
    pub fn new(input: &str) -> Result<Self, ColorFormatError> {
        let rgba = parse_color(input)?;
        Ok(Self::from_rgba(input, rgba))
    }

    pub(crate) fn from_rgba(input: &str, rgba: Rgba) -> Self {
        let oklab = rgba.to_oklab();
        Self {
            input: input.to_owned(),
            hex: rgba.to_hex(),
            hsla: rgba.to_hsla(),
            oklch: oklab.to_oklch(),
            oklab,
            rgba,
        }
    }

    /// Access the original input string, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Access the canonical RGBA color.
    pub fn rgba(&self) -> &Rgba {
        &self.rgba
    }

    /// Access the uppercase hex serialization.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Access the HSLA rendition.
    pub fn hsla(&self) -> &Hsla {
        &self.hsla
    }

    /// Access the OKLab coordinates.
    pub fn oklab(&self) -> &OkLab {
        &self.oklab
    }

    /// Access the OKLCh coordinates.
    pub fn oklch(&self) -> &OkLch {
        &self.oklch
    }
}

impl FromStr for NormalizedColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ====================================================================================================================
