//! Matcher tolerances and configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Thresholds used by the comparison pipeline.
///
/// The defaults are the grading policy; overriding them is meant for
/// experimentation, not for changing the meaning of `answers_match`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Largest accepted fraction of mismatched characters between two tokens.
    #[serde(default = "default_token_mismatch_ratio")]
    pub token_mismatch_ratio: f64,
    /// Tokens shorter than this must match exactly.
    #[serde(default = "default_min_fuzzy_len")]
    pub min_fuzzy_len: usize,
    /// Tokens whose lengths differ by more than this never match.
    #[serde(default = "default_max_len_diff")]
    pub max_len_diff: usize,
    /// Fraction of the longer token sequence that must be covered.
    #[serde(default = "default_coverage_ratio")]
    pub coverage_ratio: f64,
    /// Quantities closer than this (same unit) are equal.
    #[serde(default = "default_quantity_epsilon")]
    pub quantity_epsilon: f64,
}

fn default_token_mismatch_ratio() -> f64 {
    0.20
}
fn default_min_fuzzy_len() -> usize {
    3
}
fn default_max_len_diff() -> usize {
    2
}
fn default_coverage_ratio() -> f64 {
    0.95
}
fn default_quantity_epsilon() -> f64 {
    1e-6
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            token_mismatch_ratio: default_token_mismatch_ratio(),
            min_fuzzy_len: default_min_fuzzy_len(),
            max_len_diff: default_max_len_diff(),
            coverage_ratio: default_coverage_ratio(),
            quantity_epsilon: default_quantity_epsilon(),
        }
    }
}

impl Tolerances {
    /// Check that every ratio is finite and within [0, 1] and that the
    /// epsilon is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("token_mismatch_ratio", self.token_mismatch_ratio)?;
        check_ratio("coverage_ratio", self.coverage_ratio)?;

        if !self.quantity_epsilon.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "quantity_epsilon",
            });
        }
        if self.quantity_epsilon < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "quantity_epsilon",
                value: self.quantity_epsilon,
                expected: ">= 0",
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "0.0..=1.0",
        });
    }
    Ok(())
}

/// Top-level gistwhiz configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistwhizConfig {
    /// Matcher thresholds.
    #[serde(default)]
    pub tolerances: Tolerances,
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gistwhiz.toml` in the current directory
/// 2. `~/.config/gistwhiz/config.toml`
///
/// Environment variable overrides: `GISTWHIZ_COVERAGE_RATIO`,
/// `GISTWHIZ_TOKEN_MISMATCH_RATIO`.
pub fn load_config() -> Result<GistwhizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GistwhizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gistwhiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => GistwhizConfig::default(),
    };

    if let Some(ratio) = env_f64("GISTWHIZ_COVERAGE_RATIO")? {
        config.tolerances.coverage_ratio = ratio;
    }
    if let Some(ratio) = env_f64("GISTWHIZ_TOKEN_MISMATCH_RATIO")? {
        config.tolerances.token_mismatch_ratio = ratio;
    }

    config
        .tolerances
        .validate()
        .context("invalid tolerances")?;

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<GistwhizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<GistwhizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn env_f64(name: &str) -> Result<Option<f64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("{name} is not a number: '{raw}'")),
        Err(_) => Ok(None),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gistwhiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerances() {
        let t = Tolerances::default();
        assert_eq!(t.token_mismatch_ratio, 0.20);
        assert_eq!(t.min_fuzzy_len, 3);
        assert_eq!(t.max_len_diff, 2);
        assert_eq!(t.coverage_ratio, 0.95);
        assert_eq!(t.quantity_epsilon, 1e-6);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn parse_partial_tolerances() {
        let toml_str = r#"
[tolerances]
coverage_ratio = 0.8
"#;
        let config: GistwhizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tolerances.coverage_ratio, 0.8);
        assert_eq!(config.tolerances.min_fuzzy_len, 3);
    }

    #[test]
    fn empty_file_is_default() {
        let config: GistwhizConfig = toml::from_str("").unwrap();
        assert_eq!(config, GistwhizConfig::default());
    }

    #[test]
    fn rejects_ratio_out_of_range() {
        let t = Tolerances {
            coverage_ratio: 1.5,
            ..Tolerances::default()
        };
        let err = t.validate().unwrap_err();
        assert_eq!(err.field(), "coverage_ratio");
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let t = Tolerances {
            token_mismatch_ratio: f64::NAN,
            ..Tolerances::default()
        };
        assert_eq!(
            t.validate().unwrap_err(),
            ConfigError::NotFinite {
                field: "token_mismatch_ratio"
            }
        );
    }

    #[test]
    fn rejects_negative_epsilon() {
        let t = Tolerances {
            quantity_epsilon: -1.0,
            ..Tolerances::default()
        };
        assert_eq!(t.validate().unwrap_err().field(), "quantity_epsilon");
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gistwhiz.toml");
        std::fs::write(&path, "[tolerances]\nmax_len_diff = 1\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.tolerances.max_len_diff, 1);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("no/such/gistwhiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[tolerances]\ncoverage_ratio = 2.0\n").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("coverage_ratio"));
    }
}
