//! Domain layer: the numeral codec as pure functions
//!
//! Dependency order, leaves first: digit table, small numbers, grouping and
//! merging, titlo placement, then the formatting and parsing pipelines.

pub mod dialect;
pub mod digits;
pub mod format;
pub mod groups;
pub mod parse;
pub mod small;
pub mod titlo;

pub use dialect::Dialect;
pub use digits::{DigitTable, GROUP_SEPARATOR, LETTER_800, THOUSAND, TITLO};
