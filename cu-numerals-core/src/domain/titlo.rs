//! Titlo placement within a single group

use super::digits::{blocks_titlo, THOUSAND, TITLO};

/// Insert the titlo into `group`.
///
/// The titlo normally goes before the last letter. When the second-to-last
/// character is a thousand sign it goes before that sign instead, so the
/// sign stays attached to its digit. A thousand sign or the letter 800 in
/// the way pushes the titlo to the very end.
pub fn place_titlo(group: &[char]) -> Vec<char> {
    let mut out = group.to_vec();
    if !group.is_empty() {
        out.insert(titlo_position(group), TITLO);
    }
    out
}

fn titlo_position(group: &[char]) -> usize {
    let n = group.len();
    if n > 1 {
        let prev = group[n - 2];
        if prev == THOUSAND {
            if n > 2 && !blocks_titlo(group[n - 3]) {
                return n - 2;
            }
        } else if !blocks_titlo(prev) {
            return n - 1;
        }
    }
    n
}
