//! Splitting values into thousand groups and marking their place values

use super::dialect::Dialect;
use super::digits::THOUSAND;
use super::small::format_small_number;
use crate::error::Result;

/// One thousand group as digit letters, possibly with embedded thousand signs
pub type Group = Vec<char>;

/// Split `value` into base-1000 groups, most significant first.
///
/// 123456789 becomes the letters for [123, 456, 789]. Zero groups in the
/// middle render as empty runs. Zero itself yields no groups at all.
pub fn thousand_groups(mut value: u64) -> Result<Vec<Group>> {
    let mut groups = Vec::new();
    while value > 0 {
        groups.push(format_small_number(value % 1000)?);
        value /= 1000;
    }
    groups.reverse();
    Ok(groups)
}

/// Combine or mark the thousands and ones groups.
///
/// - A single-letter thousands group absorbs the ones group (values below
///   ten thousand need no separate thousands group).
/// - A longer thousands group gets a thousand sign between its letters when
///   the ones group is empty, or always under [`Dialect::Old`]. The old
///   dialect then also absorbs the ones group into it.
pub fn merge_low_groups(groups: &mut [Group], dialect: Dialect) {
    let n = groups.len();
    if n < 2 {
        return;
    }

    let (head, tail) = groups.split_at_mut(n - 1);
    let thousands = &mut head[n - 2];
    let ones = &mut tail[0];

    if thousands.len() == 1 {
        thousands.append(ones);
    } else if thousands.len() > 1 && (ones.is_empty() || dialect == Dialect::Old) {
        *thousands = interleave_thousands(thousands);
        if dialect == Dialect::Old {
            thousands.append(ones);
        }
    }
}

/// Put a thousand sign between every pair of adjacent letters.
///
/// The sign in front of the first letter comes from the group's position.
fn interleave_thousands(group: &[char]) -> Group {
    let mut out = Vec::with_capacity(group.len() * 2);
    for (i, &ch) in group.iter().enumerate() {
        if i > 0 {
            out.push(THOUSAND);
        }
        out.push(ch);
    }
    out
}

/// Leading thousand signs for the group at `index` out of `count` groups
#[inline]
pub fn positional_marks(count: usize, index: usize) -> usize {
    count - 1 - index
}
