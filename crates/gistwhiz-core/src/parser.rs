//! TOML answer set parser.
//!
//! Loads answer sets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{AnswerCase, AnswerSet};
use crate::normalize::normalize;

/// Intermediate TOML structure for parsing answer set files.
#[derive(Debug, Deserialize)]
struct TomlAnswerFile {
    answer_set: TomlAnswerSetHeader,
    #[serde(default)]
    cases: Vec<AnswerCase>,
}

#[derive(Debug, Deserialize)]
struct TomlAnswerSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single TOML file into an `AnswerSet`.
pub fn parse_answer_set(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer set file: {}", path.display()))?;

    parse_answer_set_str(&content, path)
}

/// Parse a TOML string into an `AnswerSet` (useful for testing).
pub fn parse_answer_set_str(content: &str, source_path: &Path) -> Result<AnswerSet> {
    let parsed: TomlAnswerFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(AnswerSet {
        id: parsed.answer_set.id,
        name: parsed.answer_set.name,
        description: parsed.answer_set.description,
        cases: parsed.cases,
    })
}

/// Recursively load all `.toml` answer set files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_answer_directory(dir: &Path) -> Result<Vec<AnswerSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_answer_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_answer_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a single file or every set under a directory.
pub fn load_answer_sets(path: &Path) -> Result<Vec<AnswerSet>> {
    if path.is_dir() {
        load_answer_directory(path)
    } else {
        Ok(vec![parse_answer_set(path)?])
    }
}

/// A warning from answer set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The case ID (if applicable).
    pub case_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an answer set for common issues.
pub fn validate_answer_set(set: &AnswerSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.cases.is_empty() {
        warnings.push(ValidationWarning {
            case_id: None,
            message: "answer set has no cases".into(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for case in &set.cases {
        if !seen_ids.insert(&case.id) {
            warnings.push(ValidationWarning {
                case_id: Some(case.id.clone()),
                message: format!("duplicate case ID: {}", case.id),
            });
        }
    }

    for case in &set.cases {
        if normalize(&case.reference).is_empty() {
            warnings.push(ValidationWarning {
                case_id: Some(case.id.clone()),
                message: "reference is empty after normalization".into(),
            });
        }
    }

    // Identical text always matches, so expecting a rejection is a typo.
    for case in &set.cases {
        if !case.expected && case.reference.trim() == case.answer.trim() {
            warnings.push(ValidationWarning {
                case_id: Some(case.id.clone()),
                message: "answer equals reference but expected = false".into(),
            });
        }
    }

    warnings
}
