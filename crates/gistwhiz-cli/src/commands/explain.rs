//! The `gistwhiz explain` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(original: String, candidate: String, config_path: Option<PathBuf>) -> Result<()> {
    let comparator = super::comparator_from(config_path)?;
    let comparison = comparator.explain(&original, &candidate);
    println!("{}", serde_json::to_string_pretty(&comparison)?);
    Ok(())
}
