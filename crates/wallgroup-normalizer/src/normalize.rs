//! Reduction of raw product titles to a base name shared by every color or
//! finish of the same design.
//!
//! ```text
//! "Oasis Navy Twist Peel and Stick Wallpaper"
//!   -> suffix      "Oasis Navy Twist"
//!   -> annotation  "Oasis Navy Twist"
//!   -> tokens      "Oasis Navy" -> "Oasis"
//! ```
//!
//! Vocabulary tables live in [`wallgroup_core::vocabulary`]; this module
//! compiles them once and applies them to each name.

use std::sync::LazyLock;

use regex::Regex;
use wallgroup_core::vocabulary::fold_whitespace;
use wallgroup_core::Vocabulary;

use crate::error::NormalizerError;
use crate::patterns::{alternation, bounded, compile, joiner};
use crate::slug::slugify;

/// Default bound on trailing-token stripping passes.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// `" - release notes"`, `" -"` and their en/em dash forms, to end of string.
static DASH_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-\u{2013}\u{2014}](?:\s.*)?$").expect("valid regex"));

/// `" (SKU 1234)"` and anything after it.
static PAREN_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*$").expect("valid regex"));

static BUILTIN: LazyLock<Normalizer> = LazyLock::new(|| {
    Normalizer::new(&Vocabulary::builtin(), DEFAULT_MAX_PASSES)
        .expect("built-in vocabulary compiles")
});

/// Normalizes `raw` with the built-in vocabulary.
///
/// See [`Normalizer::normalize`].
#[must_use]
pub fn normalize(raw: &str) -> String {
    BUILTIN.normalize(raw)
}

#[derive(Debug)]
struct SuffixMatcher {
    phrase: String,
    trailing: Regex,
    anywhere: Regex,
}

/// Compiled vocabulary. Cheap to share: `&Normalizer` is `Send + Sync` and
/// holds no per-call state.
#[derive(Debug)]
pub struct Normalizer {
    suffixes: Vec<SuffixMatcher>,
    trailing_token: Regex,
    vocabulary: Vocabulary,
    max_passes: usize,
}

impl Normalizer {
    /// Compiles `vocabulary` into matchers.
    ///
    /// `max_passes` bounds trailing-token stripping; zero is treated as one.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizerError::Pattern`] if a table cannot be compiled
    /// into a regex (for example when it exceeds the regex size limit).
    pub fn new(vocabulary: &Vocabulary, max_passes: usize) -> Result<Self, NormalizerError> {
        let suffixes = vocabulary
            .suffixes()
            .iter()
            .map(|phrase| -> Result<SuffixMatcher, NormalizerError> {
                let body = bounded(phrase);
                Ok(SuffixMatcher {
                    phrase: phrase.clone(),
                    trailing: compile("suffix", &format!(r"\s*{body}\s*$"))?,
                    anywhere: compile("suffix", &body)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tokens = alternation(vocabulary.removable_tokens());
        let join = joiner();
        // One token, optionally preceded by a joiner, or two tokens chained
        // by a joiner, anchored to the end.
        let trailing_token = compile(
            "removable token",
            &format!(r"\s+(?:{join}\s+)?{tokens}(?:\s+{join}\s+{tokens})?\s*$"),
        )?;

        Ok(Self {
            suffixes,
            trailing_token,
            vocabulary: vocabulary.clone(),
            max_passes: max_passes.max(1),
        })
    }

    /// Shared normalizer over the built-in vocabulary.
    #[must_use]
    pub fn builtin() -> &'static Normalizer {
        &BUILTIN
    }

    /// Reduces a raw product title to its base name.
    ///
    /// Never fails and never returns an empty string for input containing
    /// non-whitespace characters. Whitespace-only input is returned as is.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let name = fold_whitespace(raw);
        if name.is_empty() {
            return raw.to_string();
        }

        let name = self.strip_suffix(name);
        let name = strip_annotations(name);
        let name = self.strip_trailing_tokens(name);
        fold_whitespace(&name)
    }

    /// Machine-safe group key: the slug of [`Self::normalize`].
    #[must_use]
    pub fn group_key(&self, raw: &str) -> String {
        slugify(&self.normalize(raw))
    }

    /// Removes at most one product-type suffix. Trailing matches win over
    /// matches elsewhere in the name.
    fn strip_suffix(&self, name: String) -> String {
        let found = self
            .suffixes
            .iter()
            .find_map(|s| s.trailing.find(&name).map(|m| (s, m.range())))
            .or_else(|| {
                self.suffixes
                    .iter()
                    .find_map(|s| s.anywhere.find(&name).map(|m| (s, m.range())))
            });

        let Some((suffix, range)) = found else {
            return name;
        };

        let stripped = fold_whitespace(&format!("{} {}", &name[..range.start], &name[range.end..]));
        if stripped.is_empty() {
            tracing::trace!(name = %name, suffix = %suffix.phrase, "suffix is the whole name, keeping");
            return name;
        }
        stripped
    }

    /// Repeatedly removes a trailing removable token (or joined token pair)
    /// until nothing matches, the remainder would hold no letter or digit,
    /// or the pass limit is reached.
    fn strip_trailing_tokens(&self, name: String) -> String {
        if self.vocabulary.is_removable_token(&name) {
            return name;
        }

        let mut current = name;
        for _ in 0..self.max_passes {
            let Some(m) = self.trailing_token.find(&current) else {
                return current;
            };
            let remainder = current[..m.start()].trim_end().to_string();
            if !remainder.chars().any(char::is_alphanumeric) {
                return current;
            }
            current = remainder;
        }

        if self.trailing_token.is_match(&current) {
            tracing::warn!(
                name = %current,
                max_passes = self.max_passes,
                "trailing token stripping stopped at pass limit"
            );
        }
        current
    }
}

/// Drops a trailing `" - ..."` or `" (...)"` annotation, unless that would
/// leave nothing.
fn strip_annotations(name: String) -> String {
    [&*DASH_NOTE, &*PAREN_NOTE]
        .into_iter()
        .fold(name, |current, re| {
            let stripped = re.replace(&current, "").trim().to_string();
            if stripped.is_empty() {
                current
            } else {
                stripped
            }
        })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
