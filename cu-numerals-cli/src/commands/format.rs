//! Format command implementation

use super::{CommonArgs, DialectArg};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::collect_items;
use crate::output::{Record, RecordValue};
use anyhow::Result;
use clap::Args;
use cu_numerals_core::{FormatOptions, NumeralCodec, GROUP_SEPARATOR};

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Integers to format (read from stdin when no values or inputs are given)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Numeral dialect (default: from config, else standard)
    #[arg(short, long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Leave out the titlo
    #[arg(long)]
    pub no_titlo: bool,

    /// Separate groups with a plain space instead of a no-break space
    #[arg(long)]
    pub plain_spaces: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let (options, plain_spaces) = self.resolve_options(&config)?;
        log::info!(
            "Formatting with dialect {} (titlo: {})",
            options.dialect,
            options.add_titlo
        );

        let items = collect_items(&self.values, &self.common.input)?;
        let records = format_items(&items, options, plain_spaces)?;

        self.common.emit(&records, &config)
    }

    /// Merge command-line flags over the configuration file
    fn resolve_options(&self, config: &CliConfig) -> Result<(FormatOptions, bool)> {
        let mut options = config.format.options()?;
        if let Some(dialect) = self.dialect {
            options.dialect = dialect.into();
        }
        if self.no_titlo {
            options.add_titlo = false;
        }
        Ok((options, self.plain_spaces || config.format.plain_spaces))
    }
}

/// Format every item, stopping at the first failure
pub fn format_items(
    items: &[String],
    options: FormatOptions,
    plain_spaces: bool,
) -> Result<Vec<Record>> {
    let codec = NumeralCodec::with_options(options);

    items
        .iter()
        .map(|item| -> Result<Record> {
            let value = parse_integer(item)?;
            let mut text = codec.format(value)?;
            if plain_spaces {
                text = text.replace(GROUP_SEPARATOR, " ");
            }
            Ok(Record {
                input: item.clone(),
                output: RecordValue::Numeral(text),
            })
        })
        .collect()
}

/// Parse a decimal integer; `_` may be used as a digit separator
fn parse_integer(item: &str) -> Result<i64> {
    let value = item
        .trim()
        .replace('_', "")
        .parse::<i64>()
        .map_err(|_| CliError::InvalidValue(item.to_string()))?;
    Ok(value)
}
