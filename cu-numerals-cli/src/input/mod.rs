//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::io::{self, Read};

/// Gather the items to convert.
///
/// Positional values come first, then every non-blank line of each file
/// matched by `patterns`. With neither, lines are read from stdin.
pub fn collect_items(values: &[String], patterns: &[String]) -> Result<Vec<String>> {
    let mut items: Vec<String> = values.to_vec();

    if !patterns.is_empty() {
        for path in resolve_patterns(patterns)? {
            log::info!("Reading {}", path.display());
            items.extend(FileReader::read_lines(&path)?);
        }
    } else if values.is_empty() {
        log::info!("Reading items from stdin");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        items.extend(FileReader::lines(&buffer));
    }

    log::debug!("Collected {} item(s)", items.len());
    Ok(items)
}
