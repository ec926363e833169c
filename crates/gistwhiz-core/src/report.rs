//! Grade report types with JSON persistence.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compare::Stage;
use crate::config::Tolerances;

/// The comparator's verdict on one case, next to the expected verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub case_id: String,
    pub reference: String,
    pub answer: String,
    pub expected: bool,
    pub actual: bool,
    /// Stage that decided `actual`.
    pub stage: Stage,
}

impl CaseOutcome {
    pub fn agrees(&self) -> bool {
        self.expected == self.actual
    }
}

/// Summary of an answer set (without the full case definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSetSummary {
    pub id: String,
    pub name: String,
    pub case_count: usize,
}

/// Aggregate agreement statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub total: usize,
    pub agreed: usize,
    pub disagreed: usize,
    /// `agreed / total`, or 1.0 for an empty set.
    pub accuracy: f64,
    /// Number of cases decided by each stage.
    pub per_stage: BTreeMap<Stage, usize>,
}

impl GradeSummary {
    pub fn from_outcomes(outcomes: &[CaseOutcome]) -> Self {
        let total = outcomes.len();
        let agreed = outcomes.iter().filter(|o| o.agrees()).count();

        let mut per_stage = BTreeMap::new();
        for o in outcomes {
            *per_stage.entry(o.stage).or_insert(0) += 1;
        }

        let accuracy = if total == 0 {
            1.0
        } else {
            agreed as f64 / total as f64
        };

        Self {
            total,
            agreed,
            disagreed: total - agreed,
            accuracy,
            per_stage,
        }
    }
}

/// A complete grade report for one answer set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub answer_set: AnswerSetSummary,
    /// Tolerances the comparator ran with.
    pub tolerances: Tolerances,
    pub outcomes: Vec<CaseOutcome>,
    pub summary: GradeSummary,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl GradeReport {
    /// Cases where the comparator disagreed with the expected verdict.
    pub fn disagreements(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.agrees())
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
