//! gistwhiz-core: free-text answer comparison.
//!
//! Decides whether a user's answer matches a reference answer, tolerating
//! case, punctuation, filler words, spelled-out numbers, synonyms, unit
//! prefixes and small typos. Also provides answer sets for measuring the
//! comparator against human verdicts.

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod quantity;
pub mod report;
pub mod tables;

pub use compare::{answers_match, Comparator, Comparison, Stage};
pub use config::Tolerances;
pub use fuzzy::{token_lists_match, tokens_equal};
pub use normalize::normalize;
pub use quantity::{parse_quantity, Quantity};
