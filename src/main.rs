//! layerconf: inspect layered YAML configuration
//!
//! Loads a primary config file, its `name.custom.ext` override and an optional
//! defaults file, then prints the effective result or where it came from.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
