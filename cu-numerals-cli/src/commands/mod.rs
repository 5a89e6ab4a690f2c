//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{JsonFormatter, OutputFormatter, Record, TextFormatter};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use cu_numerals_core::Dialect;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub mod format;
pub mod generate_config;
pub mod parse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format integers as numerals
    Format(format::FormatArgs),

    /// Parse numerals into integers
    Parse(parse::ParseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List numeral dialects
    Dialects,

    /// List output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Format(args) => args.execute(),
            Commands::Parse(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut io::stdout()),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Dialects => {
                for dialect in Dialect::ALL {
                    writeln!(out, "{:<10} {}", dialect.as_str(), dialect.description())?;
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        writeln!(out, "{}", value.get_name())?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of input/output pairs
    Json,
}

/// Dialect selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// Thousands and ones groups written separately
    Standard,
    /// Multi-digit thousands fused with the ones group
    Old,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Standard => Dialect::Standard,
            DialectArg::Old => Dialect::Old,
        }
    }
}

/// Options shared by the conversion commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob), one item per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CUNUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed (e.g. by tests)
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load the configuration file, or defaults
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Output format from the flag, falling back to the configuration
    pub fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            crate::error::CliError::ConfigError(format!(
                "unknown output format \"{}\"",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Write all records to the selected destination
    pub fn emit(&self, records: &[Record], config: &CliConfig) -> Result<()> {
        let format = self.output_format(config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for record in records {
            formatter.write_record(record)?;
        }
        formatter.finish()?;

        log::info!("Wrote {} result(s) as {:?}", records.len(), format);
        Ok(())
    }
}
