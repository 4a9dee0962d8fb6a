use crate::color::Rgba;
use crate::Float;

/// The coefficients for computing relative luminance from linearized sRGB.
const LUMINANCE_WEIGHTS: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// Linearize one gamma-corrected sRGB coordinate for luminance purposes.
///
/// WCAG 2.x specifies a 0.03928 threshold for the linear segment, which
/// differs from the 0.04045 of the sRGB standard. The discrepancy never
/// changes a computed contrast ratio by a perceptible amount, but following
/// the letter of the guidelines keeps this crate's ratios bit-identical with
/// other WCAG implementations.
fn linearize(value: Float) -> Float {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of the color per WCAG 2.x. Alpha is
/// ignored; the color is treated as fully opaque.
pub(crate) fn relative_luminance(color: &Rgba) -> Float {
    let r = linearize(color.r as Float / 255.0);
    let g = linearize(color.g as Float / 255.0);
    let b = linearize(color.b as Float / 255.0);

    LUMINANCE_WEIGHTS[0].mul_add(r, LUMINANCE_WEIGHTS[1].mul_add(g, LUMINANCE_WEIGHTS[2] * b))
}

/// Compute the WCAG contrast ratio from two relative luminance values. The
/// result is in `1..=21` regardless of argument order.
pub(crate) fn contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}

// ====================================================================================================================
