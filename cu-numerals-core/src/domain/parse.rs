//! Parsing pipeline: the inverse of the formatter
//!
//! Any dialect is accepted, with or without titlo. Groups are kept as an
//! ordered list of `(multiplier, letters)` pairs so that ordering checks see
//! them exactly as written.

use super::digits::{THOUSAND, TITLO};
use super::small::parse_small_number;
use crate::error::{NumeralError, RejectReason, Result};

/// A whitespace-delimited group with its place value
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlacedGroup {
    multiplier: u64,
    chars: Vec<char>,
}

/// Parse a numeral, honoring any number of leading `-` signs.
pub fn parse_signed(text: &str) -> Result<i64> {
    let mut negative = false;
    let mut rest = text;
    while let Some(stripped) = rest.strip_prefix('-') {
        negative = !negative;
        rest = stripped;
    }

    let magnitude = parse_magnitude(rest, text)?;
    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or_else(|| NumeralError::invalid_number(text, RejectReason::Overflow))
}

/// Parse an unsigned numeral. `input` is the original text for error reports.
pub fn parse_magnitude(text: &str, input: &str) -> Result<u64> {
    let cleaned: String = text.chars().filter(|&c| c != TITLO).collect();
    if cleaned.is_empty() {
        return Err(NumeralError::invalid_number(input, RejectReason::Empty));
    }
    if cleaned == "0" {
        return Ok(0);
    }

    let mut groups = cleaned
        .split_whitespace()
        .map(|g| place_group(g, input))
        .collect::<Result<Vec<_>>>()?;
    if groups.is_empty() {
        return Err(NumeralError::invalid_number(input, RejectReason::Empty));
    }

    check_descending(&groups, input)?;
    split_thousands(&mut groups, input)?;

    let mut total = 0u64;
    for group in &groups {
        let digits: Vec<char> = group.chars.iter().copied().filter(|&c| c != THOUSAND).collect();
        let value = parse_small_number(&digits, input)?;
        total = value
            .checked_mul(group.multiplier)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| NumeralError::invalid_number(input, RejectReason::Overflow))?;
    }

    Ok(total)
}

/// Attach the place value given by the leading thousand signs
fn place_group(group: &str, input: &str) -> Result<PlacedGroup> {
    let marks = group.chars().take_while(|&c| c == THOUSAND).count();
    let multiplier = u32::try_from(marks)
        .ok()
        .and_then(|m| 1000u64.checked_pow(m))
        .ok_or_else(|| NumeralError::invalid_number(input, RejectReason::Overflow))?;

    Ok(PlacedGroup {
        multiplier,
        chars: group.chars().collect(),
    })
}

/// Multipliers must be pairwise distinct and strictly decreasing
fn check_descending(groups: &[PlacedGroup], input: &str) -> Result<()> {
    for pair in groups.windows(2) {
        let (left, right) = (pair[0].multiplier, pair[1].multiplier);
        if left == right {
            return Err(NumeralError::invalid_number(
                input,
                RejectReason::DuplicateMultiplier,
            ));
        }
        if left < right {
            return Err(NumeralError::invalid_number(
                input,
                RejectReason::MultiplierOrder,
            ));
        }
    }
    Ok(())
}

/// Undo the merge of a thousands group with the ones group.
///
/// The number of thousand signs in the thousands group tells how many of its
/// letters belong to the thousands; the remainder is the ones group. If a
/// separate ones group exists, the thousands group must have been written
/// with a single thousands letter.
fn split_thousands(groups: &mut Vec<PlacedGroup>, input: &str) -> Result<()> {
    let Some(index) = groups.iter().position(|g| g.multiplier == 1000) else {
        return Ok(());
    };
    let has_ones = groups.iter().any(|g| g.multiplier == 1);

    let marks = groups[index].chars.iter().filter(|&&c| c == THOUSAND).count();
    let digits: Vec<char> = groups[index]
        .chars
        .iter()
        .copied()
        .filter(|&c| c != THOUSAND)
        .collect();
    let split = marks.min(digits.len());
    let (high, low) = digits.split_at(split);

    if has_ones {
        if high.len() != 1 {
            return Err(NumeralError::invalid_number(
                input,
                RejectReason::MalformedThousandGroup,
            ));
        }
    } else if !low.is_empty() {
        log::debug!("splitting thousands group {high:?} from ones {low:?}");
        let ones = PlacedGroup {
            multiplier: 1,
            chars: low.to_vec(),
        };
        groups[index].chars = high.to_vec();
        groups.insert(index + 1, ones);
    }

    Ok(())
}
