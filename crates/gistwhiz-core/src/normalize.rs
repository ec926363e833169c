//! Text normalization, word-number conversion and synonym folding.
//!
//! Every function here is total: any input string produces an output string,
//! possibly empty.

use lazy_static::lazy_static;
use regex::Regex;

use crate::tables::{FILLER_WORDS, SYNONYMS, WORD_NUMBERS};

lazy_static! {
    /// Non-greedy parenthetical span: `(` up to the first `)` after it.
    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").unwrap();
    /// Anything outside lowercase ASCII letters, digits, `.`, `-` and whitespace.
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9.\s-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize free text for comparison.
///
/// Removes parentheticals, lowercases, strips punctuation, collapses
/// whitespace and drops filler words.
///
/// ```
/// use gistwhiz_core::normalize::normalize;
/// assert_eq!(normalize("The  Heart (cardiac muscle)!"), "heart");
/// ```
pub fn normalize(s: &str) -> String {
    let s = PARENTHETICAL.replace_all(s, "");
    let s = s.to_lowercase();
    let s = DISALLOWED.replace_all(&s, "");
    let s = WHITESPACE.replace_all(&s, " ");

    s.trim()
        .split(' ')
        .filter(|token| !token.is_empty() && !FILLER_WORDS.contains(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite spelled-out integers zero through ten as digits.
pub fn words_to_numbers(s: &str) -> String {
    replace_tokens(s, |token| WORD_NUMBERS.get(token).copied())
}

/// Replace each token that has a synonym entry with its mapped value.
///
/// Replacement is single-hop: a mapped value that is itself a key is not
/// resolved further.
pub fn fold_synonyms(s: &str) -> String {
    replace_tokens(s, |token| SYNONYMS.get(token).copied())
}

fn replace_tokens<'a>(s: &'a str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    s.split_whitespace()
        .map(|token| lookup(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Heart!"), "heart");
        assert_eq!(normalize("Don't stop, BELIEVING."), "dont stop believing.");
    }

    #[test]
    fn keeps_digits_periods_and_hyphens() {
        assert_eq!(normalize("3.14 well-known"), "3.14 well-known");
    }

    #[test]
    fn removes_parentheticals() {
        assert_eq!(normalize("heart (cardiac muscle)"), "heart");
        assert_eq!(normalize("(left) lung (upper lobe)"), "lung");
    }

    #[test]
    fn nested_parentheses_remove_innermost_first_span() {
        // "(b (c)" is the first non-greedy span; the stray ")" is then
        // stripped as punctuation.
        assert_eq!(normalize("a (b (c) d) e"), "d e");
    }

    #[test]
    fn unbalanced_parenthesis_is_stripped_as_punctuation() {
        assert_eq!(normalize("kidney (renal"), "kidney renal");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  red \t blood\n cell  "), "red blood cell");
    }

    #[test]
    fn drops_filler_words() {
        assert_eq!(normalize("The Lord of the Rings"), "lord rings");
        assert_eq!(normalize("an apple a day"), "apple day");
    }

    #[test]
    fn degenerate_inputs_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!?! ,,,"), "");
        assert_eq!(normalize("the a an of"), "");
        assert_eq!(normalize("(only a note)"), "");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(normalize("Café"), "caf");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "The heart (cardiac muscle)",
            "  5000   MG ",
            "a (b (c) d) e",
            "Don't-Stop... NOW!",
            "",
            "the the the",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn converts_word_numbers() {
        assert_eq!(words_to_numbers("five apples"), "5 apples");
        assert_eq!(words_to_numbers("zero ten eleven"), "0 10 eleven");
    }

    #[test]
    fn word_numbers_require_exact_token() {
        assert_eq!(words_to_numbers("fives someone"), "fives someone");
    }

    #[test]
    fn folds_synonyms_single_hop() {
        assert_eq!(fold_synonyms("heart rate"), "cardiac rate");
        // photo and picture map to each other; one hop swaps them.
        assert_eq!(fold_synonyms("photo"), "picture");
        assert_eq!(fold_synonyms("picture"), "photo");
    }

    #[test]
    fn unmapped_tokens_pass_through() {
        assert_eq!(fold_synonyms("cardiac output"), "cardiac output");
        assert_eq!(fold_synonyms(""), "");
    }
}
