use crate::color::Rgba;
use crate::Float;

/// Parse the string into an RGBA color.
///
/// This function recognizes hashed and bare hexadecimal notation as well as
/// the functional `rgb()` and `hsl()` notations, including their `rgba()` and
/// `hsla()` aliases. Before dispatching on the syntax, it trims leading and
/// trailing white space and converts ASCII letters to lowercase, which makes
/// parsing effectively case-insensitive.
///
/// On malformed input, this function returns `None`. It is the caller's
/// decision whether an absent parse is fatal; see
/// [`parse_color`](crate::parse_color) for the version that produces an
/// error.
pub(crate) fn parse(s: &str) -> Option<Rgba> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if let Some(digits) = s.strip_prefix('#') {
        parse_hex(digits)
    } else if s.starts_with("rgb") {
        parse_rgb_function(s)
    } else if s.starts_with("hsl") {
        parse_hsl_function(s)
    } else if (3..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        parse_hex(s)
    } else {
        None
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the hexadecimal digits of a color, without the leading `#`.
///
/// This function accepts exactly 3, 4, 6, or 8 digits. The 4- and 8-digit
/// forms carry a trailing alpha component scaled from `0..=255` to `0..=1`;
/// the other forms imply full opacity. Single-digit coordinates are
/// transparently duplicated, so `F` reads as `FF`.
pub(crate) fn parse_hex(s: &str) -> Option<Rgba> {
    let (components, factor) = match s.len() {
        3 => (3, 1),
        4 => (4, 1),
        6 => (3, 2),
        8 => (4, 2),
        _ => return None,
    };

    fn coordinate(s: &str, factor: usize, index: usize) -> Option<u8> {
        let t = s.get(factor * index..factor * (index + 1))?;
        let n = u8::from_str_radix(t, 16).ok()?;
        Some(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = coordinate(s, factor, 0)?;
    let c2 = coordinate(s, factor, 1)?;
    let c3 = coordinate(s, factor, 2)?;
    let alpha = if components == 4 {
        coordinate(s, factor, 3)? as Float / 255.0
    } else {
        1.0
    };

    Some(Rgba::new(c1, c2, c3, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Munge the parenthesized body of a functional color notation.
///
/// The string must already be lowercase and start with the given function
/// name. An `a` right after the name, as in `rgba()`, is accepted and
/// ignored; the alpha component is determined by the body alone.
fn function_body<'s>(s: &'s str, name: &str) -> Option<&'s str> {
    let rest = s.strip_prefix(name)?;
    let rest = rest.strip_prefix('a').unwrap_or(rest);
    let rest = rest.trim_start().strip_prefix('(')?;
    rest.strip_suffix(')').map(str::trim)
}

/// Split a function body into three channel tokens and an optional alpha
/// token.
///
/// Channels are either comma-separated or space-separated. In the
/// comma-separated form, a fourth comma-separated token is the alpha
/// component. In the space-separated form, the alpha component must be
/// introduced by a slash. Any other component count is malformed.
fn split_components(body: &str) -> Option<([&str; 3], Option<&str>)> {
    fn three<'s>(mut iter: impl Iterator<Item = &'s str>) -> Option<[&'s str; 3]> {
        let c1 = iter.next()?;
        let c2 = iter.next()?;
        let c3 = iter.next()?;
        if iter.next().is_some() {
            return None;
        }
        Some([c1, c2, c3])
    }

    if body.contains(',') {
        let mut iter = body.split(',').map(str::trim);
        let c1 = iter.next()?;
        let c2 = iter.next()?;
        let c3 = iter.next()?;
        let alpha = iter.next();
        if iter.next().is_some() {
            return None;
        }
        Some(([c1, c2, c3], alpha))
    } else if let Some((channels, alpha)) = body.split_once('/') {
        Some((three(channels.split_whitespace())?, Some(alpha.trim())))
    } else {
        Some((three(body.split_whitespace())?, None))
    }
}

/// Parse one `rgb()` color channel, either a plain number or a percentage
/// scaled against 255. The result is rounded and clamped to `0..=255`.
fn parse_rgb_channel(t: &str) -> Option<u8> {
    let value = if let Some(percent) = t.strip_suffix('%') {
        parse_number(percent)? / 100.0 * 255.0
    } else {
        parse_number(t)?
    };

    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Parse a finite floating-point number. Rust's float parser accepts `nan`
/// and `inf`, which are not colors.
fn parse_number(t: &str) -> Option<Float> {
    t.trim().parse::<Float>().ok().filter(|v| v.is_finite())
}

/// Parse an alpha component, either plain `0..=1` or a percentage of 100.
/// The result is clamped to `0..=1`.
fn parse_alpha(t: &str) -> Option<Float> {
    let value = if let Some(percent) = t.strip_suffix('%') {
        parse_number(percent)? / 100.0
    } else {
        parse_number(t)?
    };

    Some(value.clamp(0.0, 1.0))
}

/// Parse a functional `rgb()` color.
pub(crate) fn parse_rgb_function(s: &str) -> Option<Rgba> {
    let body = function_body(s, "rgb")?;
    let ([c1, c2, c3], alpha) = split_components(body)?;

    let r = parse_rgb_channel(c1)?;
    let g = parse_rgb_channel(c2)?;
    let b = parse_rgb_channel(c3)?;
    let alpha = alpha.map_or(Some(1.0), parse_alpha)?;

    Some(Rgba::new(r, g, b, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a hue component into degrees normalized to `0..360`.
///
/// A bare number is taken as degrees; the `deg`, `rad`, and `turn` suffixes
/// select the unit explicitly.
fn parse_hue(t: &str) -> Option<Float> {
    let degrees = if let Some(v) = t.strip_suffix("deg") {
        parse_number(v)?
    } else if let Some(v) = t.strip_suffix("rad") {
        parse_number(v)?.to_degrees()
    } else if let Some(v) = t.strip_suffix("turn") {
        parse_number(v)? * 360.0
    } else {
        parse_number(t)?
    };

    Some(degrees.rem_euclid(360.0))
}

/// Parse a saturation or lightness percentage into unit range. The `%` sign
/// is optional; the value is clamped to `0..=100` before scaling.
fn parse_percentage(t: &str) -> Option<Float> {
    let value = parse_number(t.strip_suffix('%').unwrap_or(t))?;
    Some(value.clamp(0.0, 100.0) / 100.0)
}

/// Convert hue, saturation, and lightness in unit range (hue in degrees) to
/// 24-bit RGB channels, using the standard hue-based interpolation. A
/// saturation of zero short-circuits to pure gray at the given lightness.
fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> [u8; 3] {
    fn to_channel(value: Float) -> u8 {
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    }

    if saturation == 0.0 {
        let gray = to_channel(lightness);
        return [gray, gray, gray];
    }

    fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            (q - p).mul_add(6.0 * t, p)
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
        } else {
            p
        }
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let hue = hue / 360.0;

    [
        to_channel(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, hue)),
        to_channel(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    ]
}

/// Parse a functional `hsl()` color.
pub(crate) fn parse_hsl_function(s: &str) -> Option<Rgba> {
    let body = function_body(s, "hsl")?;
    let ([c1, c2, c3], alpha) = split_components(body)?;

    let hue = parse_hue(c1)?;
    let saturation = parse_percentage(c2)?;
    let lightness = parse_percentage(c3)?;
    let alpha = alpha.map_or(Some(1.0), parse_alpha)?;

    let [r, g, b] = hsl_to_rgb(hue, saturation, lightness);
    Some(Rgba::new(r, g, b, alpha))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hex, parse_hsl_function, parse_rgb_function};
    use crate::color::Rgba;
    use crate::Float;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("f00"), Some(Rgba::new(255, 0, 0, 1.0)));
        assert_eq!(parse_hex("112233"), Some(Rgba::new(0x11, 0x22, 0x33, 1.0)));
        assert_eq!(parse_hex("0f08"), Some(Rgba::new(0, 255, 0, 0x88 as Float / 255.0)));
        assert_eq!(
            parse_hex("11223344"),
            Some(Rgba::new(0x11, 0x22, 0x33, 0x44 as Float / 255.0))
        );

        assert_eq!(parse_hex("ff"), None);
        assert_eq!(parse_hex("12345"), None);
        assert_eq!(parse_hex("0g0"), None);
        assert_eq!(parse_hex("00000g"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            parse_rgb_function("rgb(300,102,0)"),
            Some(Rgba::new(255, 102, 0, 1.0))
        );
        assert_eq!(
            parse_rgb_function("rgb(100% 40% 0%)"),
            Some(Rgba::new(255, 102, 0, 1.0))
        );
        assert_eq!(
            parse_rgb_function("rgb(255 102 0 / 0.5)"),
            Some(Rgba::new(255, 102, 0, 0.5))
        );
        assert_eq!(
            parse_rgb_function("rgba(255, 102, 0, 50%)"),
            Some(Rgba::new(255, 102, 0, 0.5))
        );

        assert_eq!(parse_rgb_function("rgb(255, 102)"), None);
        assert_eq!(parse_rgb_function("rgb(255, 102, 0, 1, 1)"), None);
        assert_eq!(parse_rgb_function("rgb(red, 102, 0)"), None);
        assert_eq!(parse_rgb_function("rgb 255 102 0"), None);
    }

    #[test]
    fn test_parse_hsl_function() {
        assert_eq!(
            parse_hsl_function("hsl(120,100%,50%)"),
            Some(Rgba::new(0, 255, 0, 1.0))
        );
        assert_eq!(
            parse_hsl_function("hsl(0.5turn 100% 50%)"),
            Some(Rgba::new(0, 255, 255, 1.0))
        );
        assert_eq!(
            parse_hsl_function("hsl(480deg 100% 50%)"),
            Some(Rgba::new(0, 255, 0, 1.0))
        );
        assert_eq!(
            parse_hsl_function("hsl(0, 0%, 50%)"),
            Some(Rgba::new(128, 128, 128, 1.0))
        );
        assert_eq!(
            parse_hsl_function("hsl(120, 100%, 50%, 0.25)"),
            Some(Rgba::new(0, 255, 0, 0.25))
        );

        assert_eq!(parse_hsl_function("hsl(120, 100%)"), None);
        assert_eq!(parse_hsl_function("hsl(very, green, 50%)"), None);
    }

    #[test]
    fn test_parse_dispatch() {
        assert_eq!(parse("  #F00  "), Some(Rgba::new(255, 0, 0, 1.0)));
        assert_eq!(parse("ff6600"), Some(Rgba::new(255, 102, 0, 1.0)));
        assert_eq!(parse("RGB(255, 102, 0)"), Some(Rgba::new(255, 102, 0, 1.0)));
        assert_eq!(parse("HSL(120, 100%, 50%)"), Some(Rgba::new(0, 255, 0, 1.0)));

        assert_eq!(parse("not-a-color"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("#"), None);
        // Nine bare hex digits are not a color.
        assert_eq!(parse("123456789"), None);
    }
}
