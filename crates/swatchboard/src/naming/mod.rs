//! Human-friendly color naming.
//!
//! Every swatch on a board carries a label, and the label should sound like
//! something a person would call the color. This module matches each color
//! against a reference table of well-known colors in OKLab, where distance
//! tracks perceived difference. When nothing in the table is close enough,
//! it synthesizes a descriptive name from the color's OKLCh coordinates
//! instead, such as "Light Muted Teal". Either way, naming never fails.
//!
//! ```
//! # use swatchboard::naming::{Namer, NamingStrategy};
//! # use swatchboard::NormalizedColor;
//! # use swatchboard::error::ColorFormatError;
//! let namer = Namer::new();
//! let red = NormalizedColor::new("#FF0000")?;
//! assert_eq!(namer.name(&red, &NamingStrategy::Auto), "Red");
//! assert_eq!(namer.name(&red, &NamingStrategy::None), "");
//! # Ok::<(), ColorFormatError>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::color::{NormalizedColor, OkLch};
use crate::core;
use crate::Float;

mod dataset;

/// The maximum perceptual distance at which a reference color still lends
/// its name. Beyond it, a synthesized name describes the color better.
const MATCH_THRESHOLD: Float = 0.15;

/// The chroma below which a color reads as achromatic.
pub(crate) const ACHROMATIC_THRESHOLD: Float = 0.02;

/// The lightness below which an achromatic color is simply "Black".
const BLACK_LIGHTNESS: Float = 0.15;

/// The lightness above which an achromatic color is simply "White".
const WHITE_LIGHTNESS: Float = 0.95;

// --------------------------------------------------------------------------------------------------------------------

/// The strategy for naming the colors of a palette.
///
/// The set of strategies is closed; there is no hook for custom naming
/// logic. Callers that want full control provide the names themselves.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Name every color automatically, by nearest reference color or
    /// synthesis.
    #[default]
    Auto,
    /// Do not name colors at all; every name is the empty string.
    None,
    /// Look names up in the given table, keyed by hex serialization. Colors
    /// without an entry fall back to automatic naming. Lookup tries an
    /// exact key match first and then compares keys case-insensitively.
    Provided(BTreeMap<String, String>),
}

/// One reference color, prepared for matching.
pub(crate) struct ReferenceEntry {
    name: &'static str,
    coordinates: [Float; 3],
}

impl ReferenceEntry {
    pub(crate) fn new(name: &'static str, coordinates: [Float; 3]) -> Self {
        Self { name, coordinates }
    }
}

/// The reference table in OKLab, converted once on first use and shared by
/// all namers thereafter.
static REFERENCE: LazyLock<Vec<ReferenceEntry>> = LazyLock::new(|| {
    dataset::NAMED_COLORS
        .iter()
        .map(|&(hex, name)| {
            // The table's shape is enforced by tests, so every entry parses.
            let color = crate::parse_color(hex).expect("well-formed reference table");
            ReferenceEntry::new(name, color.to_oklab().coordinates())
        })
        .collect()
});

// --------------------------------------------------------------------------------------------------------------------

/// The naming engine.
///
/// A namer is cheap to create, since it only borrows the shared reference
/// table. The interesting entry points are [`Namer::name`] for one color and
/// [`Namer::name_all`] for a palette's worth of colors with unique labels.
#[derive(Clone)]
pub struct Namer {
    entries: &'static [ReferenceEntry],
}

impl Namer {
    /// Create a new namer backed by the built-in reference table.
    pub fn new() -> Self {
        Self {
            entries: REFERENCE.as_slice(),
        }
    }

    /// Create a namer backed by the given reference entries instead of the
    /// built-in table.
    #[cfg(test)]
    pub(crate) fn with_entries(entries: &'static [ReferenceEntry]) -> Self {
        Self { entries }
    }

    /// Name the given color under the given strategy.
    ///
    /// Under [`NamingStrategy::None`], the name is the empty string. Under
    /// every other strategy, it is non-empty, and the same color always
    /// receives the same name.
    pub fn name(&self, color: &NormalizedColor, strategy: &NamingStrategy) -> String {
        match strategy {
            NamingStrategy::None => String::new(),
            NamingStrategy::Auto => self.auto_name(color),
            NamingStrategy::Provided(names) => {
                if let Some(name) = names.get(color.hex()) {
                    return name.clone();
                }
                // Scanning in key order keeps the fallback deterministic
                // even if several keys differ only in case.
                for (key, name) in names {
                    if key.eq_ignore_ascii_case(color.hex()) {
                        return name.clone();
                    }
                }
                self.auto_name(color)
            }
        }
    }

    /// Name all given colors under the given strategy, making repeated
    /// names unique.
    ///
    /// The second and subsequent occurrences of a name receive an ordinal
    /// suffix, so three crimson swatches come out as "Red", "Red 2", and
    /// "Red 3". Empty names under [`NamingStrategy::None`] stay empty.
    ///
    /// ```
    /// # use swatchboard::naming::{Namer, NamingStrategy};
    /// # use swatchboard::NormalizedColor;
    /// # use swatchboard::error::ColorFormatError;
    /// let colors = ["#FF0000", "#FF0000", "#FF0000"]
    ///     .into_iter()
    ///     .map(NormalizedColor::new)
    ///     .collect::<Result<Vec<_>, _>>()?;
    ///
    /// let names = Namer::new().name_all(&colors, &NamingStrategy::Auto);
    /// assert_eq!(names, ["Red", "Red 2", "Red 3"]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn name_all(&self, colors: &[NormalizedColor], strategy: &NamingStrategy) -> Vec<String> {
        let mut names: Vec<String> = colors
            .iter()
            .map(|color| self.name(color, strategy))
            .collect();

        // The map is only ever indexed by key, never iterated, so its
        // nondeterministic order cannot leak into the result.
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for name in &mut names {
            if name.is_empty() {
                continue;
            }
            let count = occurrences.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                let suffixed = format!("{} {}", name, *count);
                *name = suffixed;
            }
        }

        names
    }

    /// Name the color by its nearest reference color, or synthesize a name
    /// if none is close enough.
    fn auto_name(&self, color: &NormalizedColor) -> String {
        let coordinates = color.oklab().coordinates();
        let closest = core::find_closest(
            &coordinates,
            self.entries.iter().map(|entry| &entry.coordinates),
            core::delta_e_ok,
        );

        if let Some((index, distance)) = closest {
            if distance < MATCH_THRESHOLD {
                return self.entries[index].name.to_owned();
            }
        }

        synthesize(color.oklch())
    }
}

impl Default for Namer {
    fn default() -> Self {
        Self::new()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Synthesize a descriptive name from the color's OKLCh coordinates.
///
/// Near-achromatic colors become "Black", "White", or a modified "Gray"
/// depending on lightness. Chromatic colors compose an optional lightness
/// modifier, an optional chroma modifier, and a hue family name. A "Gray"
/// chroma modifier is suppressed on chromatic colors; "Pale Gray Orange"
/// would contradict itself.
fn synthesize(oklch: &OkLch) -> String {
    if oklch.c < ACHROMATIC_THRESHOLD {
        if oklch.l < BLACK_LIGHTNESS {
            return "Black".to_owned();
        }
        if oklch.l > WHITE_LIGHTNESS {
            return "White".to_owned();
        }
        return match dataset::bucket(dataset::LIGHTNESS_MODIFIERS, oklch.l) {
            Some(modifier) => format!("{modifier} Gray"),
            None => "Gray".to_owned(),
        };
    }

    // Hue 360 falls outside every family range and lands on the default,
    // which wraps around to Red just as hue 0 does.
    let family = dataset::bucket(dataset::HUE_FAMILIES, oklch.h).unwrap_or("Red");

    let mut name = String::new();
    if let Some(modifier) = dataset::bucket(dataset::LIGHTNESS_MODIFIERS, oklch.l) {
        name.push_str(modifier);
        name.push(' ');
    }
    if let Some(modifier) = dataset::bucket(dataset::CHROMA_MODIFIERS, oklch.c) {
        if modifier != "Gray" {
            name.push_str(modifier);
            name.push(' ');
        }
    }
    name.push_str(family);
    name
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::{synthesize, Namer, NamingStrategy, ReferenceEntry};
    use crate::color::{NormalizedColor, OkLch};

    fn normalize(s: &str) -> NormalizedColor {
        NormalizedColor::new(s).expect("valid literal")
    }

    #[test]
    fn test_exact_match() {
        let namer = Namer::new();
        assert_eq!(namer.name(&normalize("#FF0000"), &NamingStrategy::Auto), "Red");
        assert_eq!(namer.name(&normalize("#000000"), &NamingStrategy::Auto), "Black");
        assert_eq!(namer.name(&normalize("#FFFFFF"), &NamingStrategy::Auto), "White");
    }

    #[test]
    fn test_near_match() {
        // Nearly pure red is still perceptually closest to red.
        let namer = Namer::new();
        assert_eq!(namer.name(&normalize("#FA0505"), &NamingStrategy::Auto), "Red");
    }

    #[test]
    fn test_determinism() {
        let namer = Namer::new();
        let color = normalize("#FF6600");
        let name = namer.name(&color, &NamingStrategy::Auto);
        assert!(!name.is_empty());
        for _ in 0..3 {
            assert_eq!(namer.name(&color, &NamingStrategy::Auto), name);
        }
    }

    #[test]
    fn test_none_strategy() {
        let namer = Namer::new();
        assert_eq!(namer.name(&normalize("#FF0000"), &NamingStrategy::None), "");
        assert_eq!(
            namer.name_all(&[normalize("#FF0000"), normalize("#FF0000")], &NamingStrategy::None),
            ["", ""]
        );
    }

    #[test]
    fn test_provided_strategy() {
        let mut names = BTreeMap::new();
        names.insert("#FF0000".to_owned(), "Brand Primary".to_owned());
        names.insert("#0000ff".to_owned(), "Brand Accent".to_owned());
        let strategy = NamingStrategy::Provided(names);

        let namer = Namer::new();
        // Exact key match.
        assert_eq!(namer.name(&normalize("#FF0000"), &strategy), "Brand Primary");
        // Case-insensitive key match; serialized hex is uppercase.
        assert_eq!(namer.name(&normalize("#0000FF"), &strategy), "Brand Accent");
        // No entry falls back to automatic naming.
        assert_eq!(namer.name(&normalize("#FFFFFF"), &strategy), "White");
    }

    #[test]
    fn test_match_threshold() {
        // With only black and white as references, a saturated mid-tone is
        // too far from either, so its name must be synthesized.
        static FAR_APART: &[ReferenceEntry] = &[
            ReferenceEntry { name: "Ink", coordinates: [0.0, 0.0, 0.0] },
            ReferenceEntry { name: "Paper", coordinates: [1.0, 0.0, 0.0] },
        ];

        let namer = Namer::with_entries(FAR_APART);
        let name = namer.name(&normalize("#FF0000"), &NamingStrategy::Auto);
        assert_ne!(name, "Ink");
        assert_ne!(name, "Paper");
        assert!(name.ends_with("Red"), "unexpected name {name}");
    }

    #[test]
    fn test_synthesize_achromatic() {
        assert_eq!(synthesize(&OkLch { l: 0.10, c: 0.005, h: 0.0 }), "Black");
        assert_eq!(synthesize(&OkLch { l: 0.97, c: 0.005, h: 0.0 }), "White");
        assert_eq!(synthesize(&OkLch { l: 0.50, c: 0.005, h: 0.0 }), "Gray");
        assert_eq!(synthesize(&OkLch { l: 0.25, c: 0.010, h: 0.0 }), "Deep Gray");
        assert_eq!(synthesize(&OkLch { l: 0.80, c: 0.015, h: 123.0 }), "Light Gray");
    }

    #[test]
    fn test_synthesize_chromatic() {
        assert_eq!(synthesize(&OkLch { l: 0.50, c: 0.20, h: 30.0 }), "Red");
        assert_eq!(synthesize(&OkLch { l: 0.80, c: 0.30, h: 140.0 }), "Light Vivid Green");
        assert_eq!(synthesize(&OkLch { l: 0.40, c: 0.07, h: 200.0 }), "Dark Muted Teal");
        assert_eq!(synthesize(&OkLch { l: 0.90, c: 0.10, h: 280.0 }), "Pale Soft Violet");
        // The "Gray" chroma modifier never appears on a chromatic name.
        assert_eq!(synthesize(&OkLch { l: 0.50, c: 0.03, h: 240.0 }), "Blue");
        // Hue 360 wraps around to the first family.
        assert_eq!(synthesize(&OkLch { l: 0.50, c: 0.20, h: 360.0 }), "Red");
    }

    #[test]
    fn test_name_all_unique() {
        let namer = Namer::new();
        let colors = [
            normalize("#FF0000"),
            normalize("#0000FF"),
            normalize("#FF0000"),
            normalize("#FF0000"),
        ];

        let names = namer.name_all(&colors, &NamingStrategy::Auto);
        assert_eq!(names, ["Red", "Blue", "Red 2", "Red 3"]);
    }
}
