//! Encoding conventions for values of one thousand and above

use crate::error::NumeralError;
use std::fmt;
use std::str::FromStr;

/// How the two lowest thousand groups are segmented and marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dialect {
    /// Groups stay separate, joined by the group separator
    #[default]
    Standard,
    /// A multi-letter thousands group is fused onto the ones group
    Old,
}

impl Dialect {
    /// Every dialect, in the order they are listed to users
    pub const ALL: [Dialect; 2] = [Dialect::Standard, Dialect::Old];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Old => "old",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Dialect::Standard => "thousands and ones groups are written separately",
            Dialect::Old => "a multi-digit thousands group is fused with the ones group",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Dialect::Standard),
            "old" => Ok(Dialect::Old),
            _ => Err(NumeralError::InvalidArgument {
                value: s.to_string(),
            }),
        }
    }
}
