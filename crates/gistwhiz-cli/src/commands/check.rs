//! The `gistwhiz check` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

/// Same shape as the grading service's response body.
#[derive(Serialize)]
struct CheckResponse {
    #[serde(rename = "match")]
    matched: bool,
}

pub fn execute(
    original: String,
    candidate: String,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let comparator = super::comparator_from(config_path)?;
    let matched = comparator.matches(&original, &candidate);

    if json {
        println!("{}", serde_json::to_string(&CheckResponse { matched })?);
    } else if matched {
        println!("match");
    } else {
        println!("no match");
    }

    Ok(())
}
