//! Command-line interface for layerconf
//!
//! Provides `show` and `which` subcommands for inspecting the effective configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layerconf::{load_from_reader, ConfigArgs, ConfigSource};
use serde_yaml::Value;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod show;
mod which;

/// Config file used when neither `-c` nor `--config` is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

/// Inspect layered YAML configuration
#[derive(Parser)]
#[command(name = "layerconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: ConfigArgs,

    /// YAML file holding the fallback configuration
    #[arg(long, value_name = "FILE", global = true)]
    defaults: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Show(show::ShowArgs),

    /// Print which file the effective configuration came from
    Which,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let (value, source) = load_effective(&cli)?;

    match cli.command {
        Commands::Show(args) => show::run(args, &value),
        Commands::Which => which::run(&source),
    }
}

/// Load the configured file into a generic YAML value.
fn load_effective(cli: &Cli) -> Result<(Value, ConfigSource)> {
    let default = match &cli.defaults {
        Some(path) => Some(load_defaults(path)?),
        None => None,
    };

    let path = cli.config.path_or(DEFAULT_CONFIG_FILENAME);
    let mut value = Value::Null;
    let source = cli
        .config
        .load(&mut value, DEFAULT_CONFIG_FILENAME, default.as_ref())
        .with_context(|| format!("Failed loading config: {}", path.display()))?;

    Ok((value, source))
}

/// The defaults file is read strictly: no fallback and no custom overlay.
fn load_defaults(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed opening defaults file: {}", path.display()))?;
    let mut value = Value::Null;
    load_from_reader(&mut value, file, None)
        .with_context(|| format!("Invalid defaults file: {}", path.display()))?;
    Ok(value)
}
