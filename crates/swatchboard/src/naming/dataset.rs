//! The static data driving color naming.
//!
//! The reference table pairs well-known colors with human names; the
//! nearest-neighbor match scans it in OKLab. The three bucket tables below
//! drive fallback synthesis when no reference color is close enough. All
//! tables are ordered and scanned front to back, so overlapping or adjacent
//! ranges resolve deterministically in favor of the earlier entry.

use crate::Float;

/// Well-known colors and their names, the raw material of the nearest match.
///
/// The table is deliberately compact. A denser table would put a reference
/// color within matching distance of almost any input and starve the
/// synthesized names, which describe unusual colors better than a
/// far-fetched "closest" keyword would.
#[rustfmt::skip]
pub(crate) const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#808080", "Gray"),
    ("#C0C0C0", "Silver"),
    ("#FF0000", "Red"),
    ("#800000", "Maroon"),
    ("#A52A2A", "Brown"),
    ("#D2691E", "Chocolate"),
    ("#FA8072", "Salmon"),
    ("#FF7F50", "Coral"),
    ("#FFA500", "Orange"),
    ("#FFD700", "Gold"),
    ("#FFFF00", "Yellow"),
    ("#808000", "Olive"),
    ("#F5F5DC", "Beige"),
    ("#9ACD32", "Yellow Green"),
    ("#00FF00", "Lime"),
    ("#008000", "Green"),
    ("#2E8B57", "Sea Green"),
    ("#00FF7F", "Spring Green"),
    ("#008080", "Teal"),
    ("#40E0D0", "Turquoise"),
    ("#00FFFF", "Cyan"),
    ("#87CEEB", "Sky Blue"),
    ("#4169E1", "Royal Blue"),
    ("#0000FF", "Blue"),
    ("#000080", "Navy"),
    ("#4B0082", "Indigo"),
    ("#8A2BE2", "Blue Violet"),
    ("#800080", "Purple"),
    ("#EE82EE", "Violet"),
    ("#FF00FF", "Magenta"),
    ("#FF69B4", "Hot Pink"),
    ("#FFC0CB", "Pink"),
];

// --------------------------------------------------------------------------------------------------------------------

/// The hue families of fallback synthesis, keyed by OKLCh hue ranges in
/// degrees. The first family also covers hues that fall outside every range,
/// including the wrap-around value 360.
#[rustfmt::skip]
pub(crate) const HUE_FAMILIES: &[(Float, Float, &str)] = &[
    (  0.0,  40.0, "Red"),
    ( 40.0,  75.0, "Orange"),
    ( 75.0, 115.0, "Yellow"),
    (115.0, 170.0, "Green"),
    (170.0, 215.0, "Teal"),
    (215.0, 260.0, "Blue"),
    (260.0, 305.0, "Violet"),
    (305.0, 345.0, "Magenta"),
    (345.0, 360.0, "Red"),
];

/// The lightness modifiers of fallback synthesis, keyed by OKLab lightness
/// ranges. Mid-range lightness carries no modifier.
#[rustfmt::skip]
pub(crate) const LIGHTNESS_MODIFIERS: &[(Float, Float, &str)] = &[
    (0.0,  0.32, "Deep"),
    (0.32, 0.45, "Dark"),
    (0.72, 0.87, "Light"),
    (0.87, 1.01, "Pale"),
];

/// The chroma modifiers of fallback synthesis, keyed by OKLCh chroma ranges.
/// Mid-range chroma carries no modifier. The `Gray` label doubles as the
/// achromatic family name and is suppressed when composing a chromatic name.
#[rustfmt::skip]
pub(crate) const CHROMA_MODIFIERS: &[(Float, Float, &str)] = &[
    (0.02, 0.05, "Gray"),
    (0.05, 0.09, "Muted"),
    (0.09, 0.14, "Soft"),
    (0.26, 0.40, "Vivid"),
];

/// Look up the label for the value in an ordered bucket table. Each bucket
/// covers the half-open range from its start to its end; the first bucket
/// containing the value wins.
pub(crate) fn bucket(table: &[(Float, Float, &'static str)], value: Float) -> Option<&'static str> {
    table
        .iter()
        .find(|&&(start, end, _)| start <= value && value < end)
        .map(|&(_, _, label)| label)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{bucket, CHROMA_MODIFIERS, HUE_FAMILIES, LIGHTNESS_MODIFIERS, NAMED_COLORS};

    #[test]
    fn test_bucket() {
        // The label outlives any borrow of the table.
        let label: Option<&'static str> = bucket(HUE_FAMILIES, 0.0);
        assert_eq!(label, Some("Red"));

        assert_eq!(bucket(HUE_FAMILIES, 0.0), Some("Red"));
        assert_eq!(bucket(HUE_FAMILIES, 39.999), Some("Red"));
        assert_eq!(bucket(HUE_FAMILIES, 40.0), Some("Orange"));
        assert_eq!(bucket(HUE_FAMILIES, 350.0), Some("Red"));
        assert_eq!(bucket(HUE_FAMILIES, 360.0), None);

        assert_eq!(bucket(LIGHTNESS_MODIFIERS, 0.5), None);
        assert_eq!(bucket(LIGHTNESS_MODIFIERS, 0.1), Some("Deep"));
        assert_eq!(bucket(LIGHTNESS_MODIFIERS, 1.0), Some("Pale"));

        assert_eq!(bucket(CHROMA_MODIFIERS, 0.03), Some("Gray"));
        assert_eq!(bucket(CHROMA_MODIFIERS, 0.2), None);
        assert_eq!(bucket(CHROMA_MODIFIERS, 0.3), Some("Vivid"));
    }

    #[test]
    fn test_table_shape() {
        // Every reference entry is a six-digit uppercase hex literal.
        for (hex, name) in NAMED_COLORS {
            assert_eq!(hex.len(), 7, "{name} has a malformed hex literal");
            assert!(hex.starts_with('#'), "{name} has a malformed hex literal");
            assert!(
                hex[1..].bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
                "{name} has a malformed hex literal"
            );
            assert!(!name.is_empty(), "{hex} has an empty name");
        }

        // Bucket ranges are well-formed and nonoverlapping in scan order.
        for table in [HUE_FAMILIES, LIGHTNESS_MODIFIERS, CHROMA_MODIFIERS] {
            for window in table.windows(2) {
                let (start1, end1, _) = window[0];
                let (start2, _, _) = window[1];
                assert!(start1 < end1, "empty bucket range");
                assert!(end1 <= start2, "overlapping bucket ranges");
            }
        }
    }
}
