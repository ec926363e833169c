//! Fuzzy token matching.
//!
//! Single tokens are compared by positional character mismatches; token
//! sequences by directional coverage. Neither is a string-distance metric.

use serde::{Deserialize, Serialize};

use crate::config::Tolerances;

/// Compare two tokens with the default tolerances.
pub fn tokens_equal(a: &str, b: &str) -> bool {
    tokens_equal_with(a, b, &Tolerances::default())
}

/// Compare two tokens, allowing a small fraction of positional mismatches.
///
/// Tokens shorter than `min_fuzzy_len` must match exactly, so "ear" never
/// matches "eat". Characters past the end of the shorter token are not
/// counted as mismatches; the ratio is taken over the longer token's length.
pub fn tokens_equal_with(a: &str, b: &str, tolerances: &Tolerances) -> bool {
    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a.abs_diff(len_b) > tolerances.max_len_diff {
        return false;
    }
    if len_a.min(len_b) < tolerances.min_fuzzy_len {
        return false;
    }

    let mismatches = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    let ratio = mismatches as f64 / len_a.max(len_b) as f64;
    ratio <= tolerances.token_mismatch_ratio
}

/// How many tokens of one sequence found a partner in the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    /// Tokens of the first sequence with at least one fuzzy partner.
    pub matched: usize,
    /// Matched count needed to accept: `coverage_ratio × longer length`.
    pub required: f64,
}

impl Coverage {
    /// Whether enough tokens were matched.
    pub fn is_sufficient(&self) -> bool {
        self.matched as f64 >= self.required
    }
}

/// Count tokens of `seq_a` that fuzzily match any token of `seq_b`.
///
/// A token of `seq_b` may satisfy any number of tokens of `seq_a`, and
/// tokens of `seq_b` are never required to be matched themselves.
pub fn coverage<S: AsRef<str>>(seq_a: &[S], seq_b: &[S], tolerances: &Tolerances) -> Coverage {
    let matched = seq_a
        .iter()
        .filter(|a| {
            seq_b
                .iter()
                .any(|b| tokens_equal_with(a.as_ref(), b.as_ref(), tolerances))
        })
        .count();
    let longest = seq_a.len().max(seq_b.len());

    Coverage {
        matched,
        required: tolerances.coverage_ratio * longest as f64,
    }
}

/// Directional sequence match with the default tolerances.
///
/// Not symmetric: `token_lists_match(a, b)` may differ from
/// `token_lists_match(b, a)`.
pub fn token_lists_match<S: AsRef<str>>(seq_a: &[S], seq_b: &[S]) -> bool {
    token_lists_match_with(seq_a, seq_b, &Tolerances::default())
}

/// Directional sequence match with explicit tolerances.
pub fn token_lists_match_with<S: AsRef<str>>(
    seq_a: &[S],
    seq_b: &[S],
    tolerances: &Tolerances,
) -> bool {
    coverage(seq_a, seq_b, tolerances).is_sufficient()
}
