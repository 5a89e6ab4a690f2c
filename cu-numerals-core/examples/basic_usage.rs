//! Basic usage of the numeral codec

use cu_numerals_core::{format, parse, Dialect, FormatOptions, NumeralCodec, GROUP_SEPARATOR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: free functions with default options
    println!("=== Method 1: Free Functions ===");
    for value in [1, 11, 123, 1234, 11100, 1_234_567] {
        let text = format(value, &FormatOptions::default())?;
        println!("{value:>10} -> {}", text.replace(GROUP_SEPARATOR, " "));
    }

    // Method 2: a codec configured for the old dialect
    println!("\n=== Method 2: Old Dialect ===");
    let codec = NumeralCodec::with_dialect("old")?;
    for value in [11100, 12345, 2_464_811] {
        let text = codec.format(value)?;
        println!("{value:>10} -> {}", text.replace(GROUP_SEPARATOR, " "));
    }

    // Method 3: parsing accepts either dialect, titlo optional
    println!("\n=== Method 3: Parsing ===");
    for text in ["҂а҃і р҃", "҂а҂і҃р", "҂аі р", "-рк҃г"] {
        println!("{text:>10} -> {}", parse(text)?);
    }

    // Method 4: errors
    println!("\n=== Method 4: Errors ===");
    if let Err(e) = parse("а ҂в") {
        println!("parse error: {e}");
    }
    if let Err(e) = FormatOptions::builder().dialect_name("modern") {
        println!("option error: {e}");
    }
    let plain = FormatOptions::builder()
        .dialect(Dialect::Standard)
        .add_titlo(false)
        .build();
    println!("without titlo: {}", format(800, &plain)?);

    Ok(())
}
