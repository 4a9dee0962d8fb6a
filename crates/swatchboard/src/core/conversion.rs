use crate::color::{Hsla, OkLab, OkLch, Rgba};
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// The gamma curve of sRGB

/// Convert one gamma-corrected sRGB coordinate to its linear version.
fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Convert one linear sRGB coordinate to its gamma-corrected version.
fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.003_130_8 {
        value * 12.92
    } else {
        (magnitude.powf(1.0 / 2.4).mul_add(1.055, -0.055)).copysign(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------
// RGBA to HSLA

/// Convert the color to its HSLA representation.
///
/// Hue is rounded to whole degrees, saturation and lightness to whole
/// percentage points. The rounding loses precision on purpose: HSLA is the
/// human-facing rendition of a swatch, and whole numbers read better on a
/// board. Round-tripping through HSLA is *not* expected to reproduce the
/// exact channel values; reconstructing RGB from the rounded coordinates
/// can shift a channel by up to three steps out of 255.
pub(crate) fn rgba_to_hsla(color: &Rgba) -> Hsla {
    let r = color.r as Float / 255.0;
    let g = color.g as Float / 255.0;
    let b = color.b as Float / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        // max == min only when delta is zero, so the divisor is nonzero.
        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let hue = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (hue * 60.0, saturation)
    };

    Hsla {
        h: (hue.round() as u16) % 360,
        s: (saturation * 100.0).round() as u8,
        l: (lightness * 100.0).round() as u8,
        a: color.a,
    }
}

// --------------------------------------------------------------------------------------------------------------------
// RGBA to OKLab and back

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_OKLMS: &[[Float; 3]; 3] = &[
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: &[[Float; 3]; 3] = &[
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: &[[Float; 3]; 3] = &[
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_LINEAR_SRGB: &[[Float; 3]; 3] = &[
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert the color to OKLab, going through linear sRGB and the
/// nonlinearly adapted LMS cone responses.
pub(crate) fn rgba_to_oklab(color: &Rgba) -> OkLab {
    let linear = [
        srgb_to_linear(color.r as Float / 255.0),
        srgb_to_linear(color.g as Float / 255.0),
        srgb_to_linear(color.b as Float / 255.0),
    ];

    let [l, m, s] = multiply(LINEAR_SRGB_TO_OKLMS, &linear);
    let [l, a, b] = multiply(OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()]);
    OkLab { l, a, b }
}

/// Convert OKLab coordinates back to gamma-corrected sRGB channels, clamping
/// out-of-gamut results to the unit range before quantization.
pub(crate) fn oklab_to_rgba(lab: &OkLab, alpha: Float) -> Rgba {
    let [l, m, s] = multiply(OKLAB_TO_OKLMS, &[lab.l, lab.a, lab.b]);
    let linear = multiply(OKLMS_TO_LINEAR_SRGB, &[l.powi(3), m.powi(3), s.powi(3)]);

    let channel = |value: Float| (linear_to_srgb(value).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::new(channel(linear[0]), channel(linear[1]), channel(linear[2]), alpha)
}

// --------------------------------------------------------------------------------------------------------------------
// OKLab to OKLCh and back

/// Convert OKLab coordinates to their polar OKLCh form. The hue angle is in
/// degrees, normalized to `0..360`.
pub(crate) fn oklab_to_oklch(lab: &OkLab) -> OkLch {
    let c = lab.a.hypot(lab.b);
    let mut h = lab.b.atan2(lab.a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    OkLch { l: lab.l, c, h }
}

/// Convert polar OKLCh coordinates back to their rectangular OKLab form.
pub(crate) fn oklch_to_oklab(lch: &OkLch) -> OkLab {
    let hue = lch.h.to_radians();
    OkLab {
        l: lch.l,
        a: lch.c * hue.cos(),
        b: lch.c * hue.sin(),
    }
}

// --------------------------------------------------------------------------------------------------------------------
// Hex serialization

/// Format the color in hashed hexadecimal notation with uppercase digits.
/// The alpha pair appears only for translucent colors, so fully opaque
/// colors serialize to the canonical six-digit form.
pub(crate) fn to_hex(color: &Rgba) -> String {
    if color.a < 1.0 {
        let alpha = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02X}{:02X}{:02X}{:02X}", color.r, color.g, color.b, alpha)
    } else {
        format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
    }
}

// ====================================================================================================================
