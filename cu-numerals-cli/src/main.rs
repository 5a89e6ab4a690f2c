//! cunum: convert integers to and from Cyrillic numerals

use clap::Parser;
use cu_numerals_cli::commands::Commands;

/// Cyrillic (Church Slavonic) numeral converter
#[derive(Debug, Parser)]
#[command(name = "cunum", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
