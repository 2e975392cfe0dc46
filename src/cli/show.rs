//! Show command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_yaml::Value;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs, value: &Value) -> Result<()> {
    let rendered = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed rendering YAML")?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value).context("Failed rendering JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{rendered}");
    Ok(())
}
