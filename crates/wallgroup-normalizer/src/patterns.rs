//! Regex construction helpers for vocabulary matching.
//!
//! Every vocabulary phrase is escaped literally; whitespace inside a phrase
//! matches any run of whitespace so `"Off White"` also matches
//! `"Off  White"`. All patterns compile case-insensitively.

use regex::{Regex, RegexBuilder};
use wallgroup_core::vocabulary::JOINERS;

use crate::error::NormalizerError;

/// Escapes `phrase` word by word, joined by `\s+`.
pub(crate) fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Like [`phrase_pattern`], plus a `\b` on each side whose edge character is
/// a word character. Keeps `"Red"` from matching inside `"Credo"`.
pub(crate) fn bounded(phrase: &str) -> String {
    let left = if phrase.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let right = if phrase.chars().next_back().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    format!("{left}{}{right}", phrase_pattern(phrase))
}

/// Non-capturing alternation over `phrases`, preserving their order.
pub(crate) fn alternation(phrases: &[String]) -> String {
    let alts = phrases
        .iter()
        .map(|p| phrase_pattern(p))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{alts})")
}

/// Non-capturing alternation over the joiner words.
pub(crate) fn joiner() -> String {
    let alts = JOINERS
        .iter()
        .map(|j| regex::escape(j))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{alts})")
}

pub(crate) fn compile(context: &str, pattern: &str) -> Result<Regex, NormalizerError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| NormalizerError::Pattern {
            context: context.to_string(),
            source,
        })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
