//! Formatting pipeline: groups, merging, titlo, place-value marks

use super::dialect::Dialect;
use super::digits::{GROUP_SEPARATOR, THOUSAND, TITLO};
use super::groups::{merge_low_groups, positional_marks, thousand_groups};
use super::titlo::place_titlo;
use crate::error::Result;

/// Format a non-negative magnitude.
pub fn format_magnitude(value: u64, add_titlo: bool, dialect: Dialect) -> Result<String> {
    if value == 0 {
        let mut out = String::from("0");
        if add_titlo {
            out.push(TITLO);
        }
        return Ok(out);
    }

    let mut groups = thousand_groups(value)?;
    merge_low_groups(&mut groups, dialect);

    let count = groups.len();
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(GROUP_SEPARATOR);
        }
        out.extend(std::iter::repeat(THOUSAND).take(positional_marks(count, i)));
        if add_titlo {
            out.extend(place_titlo(group));
        } else {
            out.extend(group.iter());
        }
    }

    Ok(out)
}

/// Format a signed value; negatives get a leading `-`.
pub fn format_signed(value: i64, add_titlo: bool, dialect: Dialect) -> Result<String> {
    let magnitude = format_magnitude(value.unsigned_abs(), add_titlo, dialect)?;
    if value < 0 {
        Ok(format!("-{magnitude}"))
    } else {
        Ok(magnitude)
    }
}
