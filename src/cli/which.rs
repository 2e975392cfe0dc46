//! Which command implementation

use anyhow::Result;
use layerconf::ConfigSource;

pub fn run(source: &ConfigSource) -> Result<()> {
    println!("{source}");
    Ok(())
}
