//! Numbers in the range 0..=999 (a single thousand group)

use super::digits::DigitTable;
use crate::error::{NumeralError, RejectReason, Result};

/// Render `value` as up to three digit letters.
///
/// Teens (11..=19) put the units letter before the ten, following the
/// spoken order. Zero renders as an empty run.
pub fn format_small_number(value: u64) -> Result<Vec<char>> {
    if value >= 1000 {
        return Err(NumeralError::InvalidInput { value });
    }

    let table = DigitTable::global();
    let letter = |v: u64| {
        // v is a non-zero multiple of 1, 10 or 100 below 1000
        table
            .letter(v as u16)
            .ok_or(NumeralError::InvalidInput { value })
    };

    let hundreds = value / 100 * 100;
    let tens = value / 10 % 10 * 10;
    let units = value % 10;

    let mut out = Vec::with_capacity(3);
    if hundreds > 0 {
        out.push(letter(hundreds)?);
    }
    if tens == 10 {
        if units > 0 {
            out.push(letter(units)?);
        }
        out.push(letter(tens)?);
    } else {
        if tens > 0 {
            out.push(letter(tens)?);
        }
        if units > 0 {
            out.push(letter(units)?);
        }
    }

    Ok(out)
}

/// Sum the digit letters of one group.
///
/// Letter order is not checked, but every letter must be a digit and appear
/// at most once. `input` is the full parser input, used for error reporting.
pub fn parse_small_number(digits: &[char], input: &str) -> Result<u64> {
    if digits.is_empty() {
        return Err(NumeralError::invalid_number(input, RejectReason::EmptyGroup));
    }

    let table = DigitTable::global();
    let mut value = 0u64;
    for (i, &ch) in digits.iter().enumerate() {
        if digits[..i].contains(&ch) {
            return Err(NumeralError::invalid_number(
                input,
                RejectReason::DuplicateDigit(ch),
            ));
        }
        let v = table.value(ch).ok_or_else(|| {
            NumeralError::invalid_number(input, RejectReason::UnknownCharacter(ch))
        })?;
        value += u64::from(v);
    }

    Ok(value)
}
