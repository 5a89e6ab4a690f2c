//! Formatting options

use crate::domain::Dialect;
use crate::error::Result;

/// Options controlling how values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FormatOptions {
    /// Mark the result with a titlo
    pub add_titlo: bool,
    /// Segmentation of values of one thousand and above
    pub dialect: Dialect,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            add_titlo: true,
            dialect: Dialect::Standard,
        }
    }
}

impl FormatOptions {
    /// Create a builder
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::default()
    }

    /// Options without the titlo
    pub fn plain() -> Self {
        Self {
            add_titlo: false,
            ..Self::default()
        }
    }
}

/// Builder for [`FormatOptions`]
#[derive(Debug, Default)]
pub struct FormatOptionsBuilder {
    options: FormatOptions,
}

impl FormatOptionsBuilder {
    /// Enable or disable the titlo
    pub fn add_titlo(mut self, add_titlo: bool) -> Self {
        self.options.add_titlo = add_titlo;
        self
    }

    /// Set the dialect
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.options.dialect = dialect;
        self
    }

    /// Set the dialect by name; fails on names other than "standard" and "old"
    pub fn dialect_name(mut self, name: &str) -> Result<Self> {
        self.options.dialect = name.parse()?;
        Ok(self)
    }

    /// Build the options
    pub fn build(self) -> FormatOptions {
        self.options
    }
}
