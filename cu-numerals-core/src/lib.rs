//! Cyrillic (Church Slavonic) numerals
//!
//! This crate converts integers to and from the alphabetic numeral notation
//! described in Unicode Technical Note #41. Letters stand for digit values
//! (1–9, 10–90, 100–900), each group of three decimal digits carries one
//! thousand sign `҂` per power of one thousand, and a titlo `҃` marks the
//! letter run as a number.
//!
//! # Architecture
//!
//! - **Domain layer**: pure functions for each stage of the codec
//!   (digit table, thousand groups, titlo placement, parsing)
//! - **API layer**: [`format`], [`parse`], [`FormatOptions`] and
//!   [`NumeralCodec`]
//!
//! Everything is synchronous and free of shared mutable state; the digit
//! table is built once and read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use cu_numerals_core::{format, parse, Dialect, FormatOptions};
//!
//! let text = format(1860, &FormatOptions::default()).unwrap();
//! assert_eq!(text, "҂аѿѯ҃");
//! assert_eq!(parse(&text).unwrap(), 1860);
//!
//! // The old dialect fuses thousands and ones into one group
//! let old = FormatOptions::builder().dialect(Dialect::Old).build();
//! assert_eq!(format(12345, &old).unwrap(), "҂в҂ітм҃є");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod domain;
pub mod error;

pub use api::{format, parse, place_titlo, FormatOptions, FormatOptionsBuilder, NumeralCodec};
pub use domain::{Dialect, DigitTable, GROUP_SEPARATOR, LETTER_800, THOUSAND, TITLO};
pub use error::{NumeralError, RejectReason, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_constants() {
        assert_eq!(THOUSAND, '\u{0482}');
        assert_eq!(TITLO, '\u{0483}');
        assert_eq!(LETTER_800, '\u{047f}');
        assert_eq!(GROUP_SEPARATOR, '\u{00a0}');
    }

    #[test]
    fn test_format_and_parse_exports() {
        let text = format(-7, &FormatOptions::default()).unwrap();
        assert_eq!(parse(&text).unwrap(), -7);
    }
}
