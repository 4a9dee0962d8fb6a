//! Utility module with swatchboard's errors.

/// An unrecognizable color literal.
///
/// This error indicates that a color literal matched none of the supported
/// syntaxes—hashed or bare hexadecimal, `rgb()`, and `hsl()`—or that it
/// matched one of them but a component was malformed, such as a non-hex digit
/// or an `rgb()` function with the wrong number of arguments. The error
/// retains the offending input, which is the only state downstream consumers
/// have asked for so far.
///
/// The individual parsers do not produce this error. They signal failure
/// locally by returning `None`, and only the aggregate normalize operation
/// (and hence every entry point built on it) elevates an absent parse into
/// this error. Naming and contrast operations never fail at all; they degrade
/// to documented defaults, since a palette board must render *something* for
/// every swatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFormatError {
    input: String,
}

impl ColorFormatError {
    /// Create a new error for the given color literal.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Access the offending color literal.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "\"{}\" is not a recognizable color; expected hex, rgb(), or hsl() notation",
            self.input
        ))
    }
}

impl std::error::Error for ColorFormatError {}
