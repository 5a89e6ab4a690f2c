//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!("   cunum format --config {} 1860", self.output.display());

        Ok(())
    }
}

/// Template content, matching the built-in defaults
pub fn generate_template() -> String {
    r#"# cunum configuration

[format]
# Numeral dialect: "standard" or "old"
# The old dialect fuses multi-digit thousands with the ones group
dialect = "standard"

# Mark every group with a titlo
add_titlo = true

# Separate groups with a plain space instead of U+00A0 NO-BREAK SPACE
plain_spaces = false

[output]
# Output format when --format is not given: "text" or "json"
default_format = "text"

# Indent JSON output
pretty_json = true
"#
    .to_string()
}
