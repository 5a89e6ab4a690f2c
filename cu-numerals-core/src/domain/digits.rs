//! Digit letters and the special characters of the numeral notation
//!
//! See Unicode Technical Note #41 for the conventions implemented here.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Thousand sign (U+0482). Each leading occurrence multiplies by 1000.
pub const THOUSAND: char = '\u{0482}';

/// Combining titlo (U+0483). Marks a letter run as a number.
pub const TITLO: char = '\u{0483}';

/// Letter "ot" (U+047F), value 800. The titlo is never placed right after it.
pub const LETTER_800: char = '\u{047f}';

/// No-break space (U+00A0) placed between thousand groups.
pub const GROUP_SEPARATOR: char = '\u{00a0}';

/// Letter/value pairs, largest value first
const DIGITS: [(char, u16); 27] = [
    ('\u{0446}', 900),
    ('\u{047f}', 800),
    ('\u{0471}', 700),
    ('\u{0445}', 600),
    ('\u{0444}', 500),
    ('\u{0443}', 400),
    ('\u{0442}', 300),
    ('\u{0441}', 200),
    ('\u{0440}', 100),
    ('\u{0447}', 90),
    ('\u{043f}', 80),
    ('\u{047b}', 70),
    ('\u{046f}', 60),
    ('\u{043d}', 50),
    ('\u{043c}', 40),
    ('\u{043b}', 30),
    ('\u{043a}', 20),
    ('\u{0456}', 10),
    ('\u{0473}', 9),
    ('\u{0438}', 8),
    ('\u{0437}', 7),
    ('\u{0455}', 6),
    ('\u{0454}', 5),
    ('\u{0434}', 4),
    ('\u{0433}', 3),
    ('\u{0432}', 2),
    ('\u{0430}', 1),
];

static TABLE: OnceLock<DigitTable> = OnceLock::new();

/// Bijection between digit letters and their values
#[derive(Debug)]
pub struct DigitTable {
    by_letter: HashMap<char, u16>,
    by_value: HashMap<u16, char>,
}

impl DigitTable {
    fn build() -> Self {
        let by_letter: HashMap<char, u16> = DIGITS.iter().copied().collect();
        let by_value = DIGITS.iter().map(|&(ch, v)| (v, ch)).collect();
        Self {
            by_letter,
            by_value,
        }
    }

    /// Shared table, built on first access
    pub fn global() -> &'static DigitTable {
        TABLE.get_or_init(Self::build)
    }

    /// Letter for a value in {1..9, 10..90, 100..900}
    #[inline]
    pub fn letter(&self, value: u16) -> Option<char> {
        self.by_value.get(&value).copied()
    }

    /// Value of a digit letter
    #[inline]
    pub fn value(&self, letter: char) -> Option<u16> {
        self.by_letter.get(&letter).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.by_letter.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }
}

/// Characters the titlo should not be placed directly after
#[inline]
pub(crate) fn blocks_titlo(ch: char) -> bool {
    ch == THOUSAND || ch == LETTER_800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_27_entries() {
        let table = DigitTable::global();
        assert_eq!(table.len(), 27);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_table_is_a_bijection() {
        let table = DigitTable::global();
        for scale in [1u16, 10, 100] {
            for d in 1..=9u16 {
                let value = d * scale;
                let letter = table.letter(value).expect("every digit value has a letter");
                assert_eq!(table.value(letter), Some(value));
            }
        }
    }

    #[test]
    fn test_known_letters() {
        let table = DigitTable::global();
        assert_eq!(table.value('а'), Some(1));
        assert_eq!(table.value('і'), Some(10));
        assert_eq!(table.value('р'), Some(100));
        assert_eq!(table.value(LETTER_800), Some(800));
        assert_eq!(table.letter(900), Some('ц'));
    }

    #[test]
    fn test_non_digits() {
        let table = DigitTable::global();
        assert_eq!(table.value('b'), None);
        assert_eq!(table.value(THOUSAND), None);
        assert_eq!(table.value(TITLO), None);
        assert_eq!(table.letter(0), None);
        assert_eq!(table.letter(11), None);
        assert_eq!(table.letter(1000), None);
    }

    #[test]
    fn test_titlo_blockers() {
        assert!(blocks_titlo(THOUSAND));
        assert!(blocks_titlo(LETTER_800));
        assert!(!blocks_titlo('а'));
    }
}
