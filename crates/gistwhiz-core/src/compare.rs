//! The answer comparator: composes normalization, quantity parsing and fuzzy
//! matching into a single verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Tolerances;
use crate::fuzzy::{self, Coverage};
use crate::normalize::{fold_synonyms, normalize, words_to_numbers};
use crate::quantity::{parse_quantity, Quantity};

/// Decide whether `candidate` is an acceptable answer for `original`.
///
/// Uses the default tolerances. Never fails: every pair of strings produces
/// a verdict.
///
/// ```
/// use gistwhiz_core::answers_match;
///
/// assert!(answers_match("5000 mg", "5 g"));
/// assert!(answers_match("five apples", "5 apples"));
/// assert!(!answers_match("ear", "eat"));
/// ```
pub fn answers_match(original: &str, candidate: &str) -> bool {
    Comparator::default().matches(original, candidate)
}

/// The pipeline stage that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Prepared strings were identical.
    Exact,
    /// Both sides parsed as equal quantities.
    Quantity,
    /// Token coverage decided, for or against.
    Fuzzy,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Exact => write!(f, "exact"),
            Stage::Quantity => write!(f, "quantity"),
            Stage::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// One input's intermediate forms through the text stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prepared {
    /// Input as given.
    pub raw: String,
    /// After normalization.
    pub normalized: String,
    /// After word-number conversion.
    pub numbered: String,
    /// After synonym folding; this is what later stages compare.
    pub folded: String,
}

impl Prepared {
    fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let numbered = words_to_numbers(&normalized);
        let folded = fold_synonyms(&numbered);
        Self {
            raw: raw.to_string(),
            normalized,
            numbered,
            folded,
        }
    }

    fn tokens(&self) -> Vec<&str> {
        self.folded.split_whitespace().collect()
    }
}

/// A verdict together with how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub original: Prepared,
    pub candidate: Prepared,
    /// Quantities parsed from each side, when both stages were reached.
    pub original_quantity: Option<Quantity>,
    pub candidate_quantity: Option<Quantity>,
    /// Coverage of the original's tokens by the candidate's, when the fuzzy
    /// stage ran.
    pub coverage: Option<Coverage>,
    /// Stage that decided the verdict.
    pub stage: Stage,
    /// The verdict.
    pub matched: bool,
}

/// Answer comparator with configurable tolerances.
///
/// Holds no state between calls; a single instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    tolerances: Tolerances,
}

impl Comparator {
    pub fn new(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Whether `candidate` matches `original`.
    pub fn matches(&self, original: &str, candidate: &str) -> bool {
        self.explain(original, candidate).matched
    }

    /// Run the pipeline and record every intermediate result.
    ///
    /// Stages run in order and stop at the first success: exact equality,
    /// then quantity equality, then directional token coverage.
    pub fn explain(&self, original: &str, candidate: &str) -> Comparison {
        let a = Prepared::new(original);
        let b = Prepared::new(candidate);
        tracing::trace!(original = %a.folded, candidate = %b.folded, "prepared answers");

        if a.folded == b.folded {
            tracing::debug!(answer = %a.folded, "exact match");
            return Comparison {
                original: a,
                candidate: b,
                original_quantity: None,
                candidate_quantity: None,
                coverage: None,
                stage: Stage::Exact,
                matched: true,
            };
        }

        let qa = parse_quantity(&a.folded);
        let qb = parse_quantity(&b.folded);
        if let (Some(x), Some(y)) = (&qa, &qb) {
            if x.approx_eq(y, self.tolerances.quantity_epsilon) {
                tracing::debug!(original = %x, candidate = %y, "quantity match");
                return Comparison {
                    original: a,
                    candidate: b,
                    original_quantity: qa,
                    candidate_quantity: qb,
                    coverage: None,
                    stage: Stage::Quantity,
                    matched: true,
                };
            }
        }

        let coverage = fuzzy::coverage(&a.tokens(), &b.tokens(), &self.tolerances);
        let matched = coverage.is_sufficient();
        tracing::debug!(
            original = %a.folded,
            candidate = %b.folded,
            covered = coverage.matched,
            required = coverage.required,
            matched,
            "fuzzy token comparison"
        );

        Comparison {
            original: a,
            candidate: b,
            original_quantity: qa,
            candidate_quantity: qb,
            coverage: Some(coverage),
            stage: Stage::Fuzzy,
            matched,
        }
    }
}
