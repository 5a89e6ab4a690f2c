//! Parse command implementation

use super::CommonArgs;
use crate::input::collect_items;
use crate::output::{Record, RecordValue};
use anyhow::Result;
use clap::Args;
use cu_numerals_core::parse;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Numerals to parse (read from stdin when no numerals or inputs are given)
    #[arg(value_name = "NUMERAL", allow_hyphen_values = true)]
    pub numerals: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let items = collect_items(&self.numerals, &self.common.input)?;
        let records = parse_items(&items)?;

        self.common.emit(&records, &config)
    }
}

/// Parse every item, stopping at the first failure
pub fn parse_items(items: &[String]) -> Result<Vec<Record>> {
    items
        .iter()
        .map(|item| -> Result<Record> {
            let value = parse(item)?;
            Ok(Record {
                input: item.clone(),
                output: RecordValue::Integer(value),
            })
        })
        .collect()
}
