pub mod check;
pub mod explain;
pub mod grade;
pub mod init;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gistwhiz_core::config::load_config_from;
use gistwhiz_core::Comparator;

/// Build a comparator from the configured tolerances.
fn comparator_from(config_path: Option<PathBuf>) -> Result<Comparator> {
    let config = load_config_from(config_path.as_deref())?;
    Ok(Comparator::new(config.tolerances))
}
