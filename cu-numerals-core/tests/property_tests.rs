//! Property-based tests for the codec

use cu_numerals_core::{format, parse, Dialect, FormatOptions, GROUP_SEPARATOR, TITLO};
use proptest::prelude::*;

fn arb_options() -> impl Strategy<Value = FormatOptions> {
    (prop::sample::select(Dialect::ALL.to_vec()), any::<bool>()).prop_map(
        |(dialect, add_titlo)| {
            FormatOptions::builder()
                .dialect(dialect)
                .add_titlo(add_titlo)
                .build()
        },
    )
}

proptest! {
    #[test]
    fn round_trip_below_ten_million(value in 0i64..10_000_000, options in arb_options()) {
        let text = format(value, &options).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn round_trip_full_range(value in any::<i64>(), options in arb_options()) {
        let text = format(value, &options).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn negation_prefixes_a_minus(value in 1i64..i64::MAX, options in arb_options()) {
        let positive = format(value, &options).unwrap();
        let negative = format(-value, &options).unwrap();
        prop_assert_eq!(&negative, &format!("-{positive}"));
        prop_assert_eq!(parse(&negative).unwrap(), -parse(&positive).unwrap());
    }

    #[test]
    fn plain_spaces_parse_the_same(value in 0i64..1_000_000_000_000, options in arb_options()) {
        let text = format(value, &options).unwrap();
        let spaced = text.replace(GROUP_SEPARATOR, " ");
        prop_assert_eq!(parse(&spaced).unwrap(), value);
    }

    #[test]
    fn titlo_is_optional_when_parsing(value in any::<i64>()) {
        let text = format(value, &FormatOptions::default()).unwrap();
        let stripped: String = text.chars().filter(|&c| c != TITLO).collect();
        prop_assert_eq!(parse(&stripped).unwrap(), value);
    }

    #[test]
    fn at_most_one_titlo_per_group(value in 1i64..i64::MAX, options in arb_options()) {
        let text = format(value, &options).unwrap();
        for group in text.split(GROUP_SEPARATOR) {
            let titlos = group.chars().filter(|&c| c == TITLO).count();
            prop_assert_eq!(titlos, usize::from(options.add_titlo));
        }
    }

    #[test]
    fn parse_never_panics(text in "[-\u{0482}\u{0483} \u{0430}-\u{0447}\u{0456}\u{047f}0-9]{0,12}") {
        let _ = parse(&text);
    }
}
