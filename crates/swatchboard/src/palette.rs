//! Packing colors into a finished palette.
//!
//! Packing is the last computational stage before a board is rendered: it
//! normalizes the input literals, orders them, names them, selects text
//! colors, and assigns each swatch its final display position.

use crate::color::NormalizedColor;
use crate::contrast;
use crate::error::ColorFormatError;
use crate::naming::{Namer, NamingStrategy, ACHROMATIC_THRESHOLD};

/// The strategy for ordering a palette's swatches.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Keep the order in which the colors were given.
    #[default]
    Input,
    /// Order chromatic colors by ascending OKLCh hue and, within a hue,
    /// descending lightness. Near-achromatic colors come last, by
    /// descending lightness. The sort is stable, so input order breaks
    /// remaining ties.
    Lch,
}

/// The options controlling palette packing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteOptions {
    pub sort: SortStrategy,
    pub naming: NamingStrategy,
}

/// One finished swatch of a palette.
///
/// The index records the swatch's display position after sorting and is
/// authoritative; consumers must not re-derive positions from input order.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteColor {
    color: NormalizedColor,
    name: String,
    text_color: &'static str,
    index: usize,
}

impl PaletteColor {
    /// Access the normalized color.
    pub fn color(&self) -> &NormalizedColor {
        &self.color
    }

    /// Access the swatch's label. Empty under [`NamingStrategy::None`],
    /// non-empty and unique within the palette otherwise.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the text color for rendering the label on the swatch, either
    /// [`contrast::DARK_TEXT`] or [`contrast::LIGHT_TEXT`].
    pub fn text_color(&self) -> &'static str {
        self.text_color
    }

    /// Access the swatch's display position within the palette.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Pack the given color literals into a palette.
///
/// Every literal is normalized up front; the first invalid one fails the
/// whole palette, since silently dropping a swatch would misrepresent the
/// caller's input. The result is deterministic for the same inputs and
/// options.
///
/// ```
/// # use swatchboard::palette::{build_palette, PaletteOptions};
/// # use swatchboard::error::ColorFormatError;
/// let palette = build_palette(["#FF0000", "rgb(0, 0, 255)"], &PaletteOptions::default())?;
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette[0].name(), "Red");
/// assert_eq!(palette[1].name(), "Blue");
/// assert_eq!(palette[1].index(), 1);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn build_palette<I, S>(
    inputs: I,
    options: &PaletteOptions,
) -> Result<Vec<PaletteColor>, ColorFormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut colors = inputs
        .into_iter()
        .map(|input| NormalizedColor::new(input.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if options.sort == SortStrategy::Lch {
        sort_by_lch(&mut colors);
    }

    let names = Namer::new().name_all(&colors, &options.naming);

    Ok(colors
        .into_iter()
        .zip(names)
        .enumerate()
        .map(|(index, (color, name))| PaletteColor {
            text_color: contrast::text_color_for(color.rgba()),
            color,
            name,
            index,
        })
        .collect())
}

/// Sort the colors in hue-then-lightness order; see [`SortStrategy::Lch`].
fn sort_by_lch(colors: &mut [NormalizedColor]) {
    colors.sort_by(|color1, color2| {
        let (lch1, lch2) = (color1.oklch(), color2.oklch());
        let achromatic1 = lch1.c < ACHROMATIC_THRESHOLD;
        let achromatic2 = lch2.c < ACHROMATIC_THRESHOLD;

        match (achromatic1, achromatic2) {
            (false, false) => lch1.h.total_cmp(&lch2.h).then(lch2.l.total_cmp(&lch1.l)),
            (true, true) => lch2.l.total_cmp(&lch1.l),
            (false, true) => std::cmp::Ordering::Less,
            (true, false) => std::cmp::Ordering::Greater,
        }
    });
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{build_palette, PaletteOptions, SortStrategy};
    use crate::contrast::{DARK_TEXT, LIGHT_TEXT};
    use crate::naming::NamingStrategy;

    #[test]
    fn test_build_palette() {
        let palette = build_palette(["#FF0000", "#FFFFFF"], &PaletteOptions::default())
            .expect("valid literals");

        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].name(), "Red");
        assert_eq!(palette[0].color().hex(), "#FF0000");
        assert_eq!(palette[0].text_color(), DARK_TEXT);
        assert_eq!(palette[0].index(), 0);
        assert_eq!(palette[1].name(), "White");
        assert_eq!(palette[1].text_color(), DARK_TEXT);
        assert_eq!(palette[1].index(), 1);
    }

    #[test]
    fn test_invalid_input_fails() {
        let error = build_palette(["#FF0000", "mauve-ish"], &PaletteOptions::default())
            .expect_err("invalid literal");
        assert_eq!(error.input(), "mauve-ish");
    }

    #[test]
    fn test_text_colors() {
        let palette = build_palette(["#000000", "#FFFF00"], &PaletteOptions::default())
            .expect("valid literals");
        assert_eq!(palette[0].text_color(), LIGHT_TEXT);
        assert_eq!(palette[1].text_color(), DARK_TEXT);
    }

    #[test]
    fn test_lch_sort() {
        let options = PaletteOptions {
            sort: SortStrategy::Lch,
            naming: NamingStrategy::None,
        };
        // Gray and white must trail the chromatic colors; red precedes blue
        // on the hue circle.
        let palette = build_palette(["#808080", "#0000FF", "#FFFFFF", "#FF0000"], &options)
            .expect("valid literals");

        let hexes: Vec<&str> = palette.iter().map(|swatch| swatch.color().hex()).collect();
        assert_eq!(hexes, ["#FF0000", "#0000FF", "#FFFFFF", "#808080"]);
        // Indices reflect the sorted order, not the input order.
        let indices: Vec<usize> = palette.iter().map(super::PaletteColor::index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_lch_sort_is_stable() {
        let options = PaletteOptions {
            sort: SortStrategy::Lch,
            naming: NamingStrategy::Auto,
        };
        let palette = build_palette(["#FF0000", "#FF0000"], &options).expect("valid literals");
        assert_eq!(palette[0].name(), "Red");
        assert_eq!(palette[1].name(), "Red 2");
    }
}
