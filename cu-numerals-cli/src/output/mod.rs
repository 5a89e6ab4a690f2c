//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single conversion
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// One converted item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The item as given by the user
    pub input: String,
    /// The conversion result
    pub output: RecordValue,
}

/// Result of a conversion: a numeral or an integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// A formatted numeral
    Numeral(String),
    /// A parsed value
    Integer(i64),
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Numeral(text) => f.write_str(text),
            RecordValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
