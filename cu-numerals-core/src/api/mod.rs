//! Public API for formatting and parsing numerals
//!
//! The free functions [`format`] and [`parse`] cover most uses. [`NumeralCodec`]
//! bundles a fixed set of [`FormatOptions`] for callers that convert many
//! values the same way.

mod config;


pub use config::{FormatOptions, FormatOptionsBuilder};

use crate::domain::format::format_signed;
use crate::domain::parse::parse_signed;
use crate::error::Result;

/// Format `value` as a numeral.
///
/// # Example
///
/// ```rust
/// use cu_numerals_core::{format, Dialect, FormatOptions};
///
/// assert_eq!(format(1234, &FormatOptions::default()).unwrap(), "҂асл҃д");
///
/// let old = FormatOptions::builder().dialect(Dialect::Old).build();
/// assert_eq!(format(11100, &old).unwrap(), "҂а҂і҃р");
/// ```
pub fn format(value: i64, options: &FormatOptions) -> Result<String> {
    format_signed(value, options.add_titlo, options.dialect)
}

/// Parse a numeral written in either dialect, with or without titlo.
///
/// # Example
///
/// ```rust
/// use cu_numerals_core::parse;
///
/// assert_eq!(parse("҂а҃і р҃").unwrap(), 11100);
/// assert_eq!(parse("҂а҂і҃р").unwrap(), 11100);
/// assert!(parse("а ҂в").is_err());
/// ```
pub fn parse(text: &str) -> Result<i64> {
    parse_signed(text)
}

/// Insert a titlo into a single group string.
///
/// Useful when composing numerals by hand; [`format`] already does this.
pub fn place_titlo(group: &str) -> String {
    let chars: Vec<char> = group.chars().collect();
    crate::domain::titlo::place_titlo(&chars)
        .into_iter()
        .collect()
}

/// Formatter and parser with fixed options
#[derive(Debug, Clone, Default)]
pub struct NumeralCodec {
    options: FormatOptions,
}

impl NumeralCodec {
    /// Create a codec with default options (titlo, standard dialect)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with custom options
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Create a codec for a dialect given by name
    pub fn with_dialect(name: &str) -> Result<Self> {
        let options = FormatOptions::builder().dialect_name(name)?.build();
        Ok(Self::with_options(options))
    }

    /// Format a value using this codec's options
    pub fn format(&self, value: i64) -> Result<String> {
        format(value, &self.options)
    }

    /// Parse a numeral. Parsing does not depend on the options.
    pub fn parse(&self, text: &str) -> Result<i64> {
        parse(text)
    }

    /// Get the options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}
