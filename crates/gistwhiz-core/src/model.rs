//! Answer set data model.
//!
//! An answer set is a labelled collection of (reference, answer) pairs with
//! the verdict a human grader expects. Grading an answer set measures how
//! often the comparator agrees with those verdicts.

use serde::{Deserialize, Serialize};

/// A single graded pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCase {
    /// Unique identifier within the set.
    pub id: String,
    /// The reference ("original") answer.
    pub reference: String,
    /// The answer given by the user.
    pub answer: String,
    /// Whether the answer should be accepted.
    #[serde(default = "default_true")]
    pub expected: bool,
    /// Tags for filtering cases.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form note about what the case exercises.
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}

/// A collection of answer cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Unique identifier for this answer set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cases: Vec<AnswerCase>,
}

impl AnswerSet {
    /// Keep only cases carrying at least one of `tags`.
    pub fn retain_tags(&mut self, tags: &[&str]) {
        self.cases
            .retain(|c| c.tags.iter().any(|t| tags.contains(&t.as_str())));
    }
}
