//! Suffix and removable-token tables that drive name normalization.
//!
//! Both tables are open lists curated against real catalog data. The
//! built-in tables below are the baseline; a YAML file can extend or replace
//! them at startup (see [`load_vocabulary`]).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Words that chain two removable tokens, e.g. `"Apple & Rose"`.
pub const JOINERS: [&str; 3] = ["&", "and", "+"];

/// Product-type phrases. Never distinguish one design from another.
const BUILTIN_SUFFIXES: &[&str] = &[
    "Peel & Stick Floor Tiles",
    "Peel & Stick Floor Tile",
    "Peel and Stick Floor Tiles",
    "Peel and Stick Wallpaper",
    "Peel & Stick Wallpaper",
    "Self Adhesive Mural",
    "Wall Mural",
    "Floor Tiles",
    "Wall Decals",
    "Wall Panels",
    "Papel Tapiz",
    "Moulding",
    "Peel & Stick",
    "Peel and Stick",
    "Wallpaper",
];

/// Colors (English and Spanish) and descriptive modifiers that mark a
/// variant rather than a design.
const BUILTIN_REMOVABLE_TOKENS: &[&str] = &[
    // multi-word colors
    "Off White",
    "Off-White",
    "Black & White",
    "Black and White",
    "Rose Gold",
    "Dark Brown",
    "Light Brown",
    "Light Blue",
    "Dark Blue",
    "Sky Blue",
    "Powdered Blue",
    "Azul Marino",
    "Light Grey",
    "Light Gray",
    "Dark Grey",
    "Dark Gray",
    "Light Green",
    "Dark Green",
    "Light Pink",
    "Egg Shell",
    // whites and neutrals
    "White",
    "Blanco",
    "Ivory",
    "Cream",
    "Crema",
    "Beige",
    "Tan",
    "Tostado",
    "Taupe",
    "Oatmeal",
    "Avena",
    "Neutral",
    "Neutro",
    "Natural",
    "Sand",
    "Arena",
    "Parchment",
    "Linen",
    "Lino",
    "Wheat",
    "Trigo",
    "Pebble",
    "Stone",
    "Clay",
    // browns
    "Brown",
    "Cafe",
    "Marron",
    "Mocha",
    "Moca",
    "Chai",
    "Caramel",
    "Mink",
    // blues
    "Teal",
    "Turquoise",
    "Turquesa",
    "Aqua",
    "Navy",
    "Blue",
    "Azul",
    "Cobalt",
    "Cobalto",
    "Indigo",
    "Sky",
    // pinks and purples
    "Pink",
    "Rosa",
    "Rose",
    "Blush",
    "Rubor",
    "Magenta",
    "Flamingo",
    "Purple",
    "Morado",
    "Lilac",
    "Lila",
    "Mauve",
    "Violet",
    "Violeta",
    "Lavender",
    "Lavanda",
    "Plum",
    "Ciruela",
    "Dusk",
    // blacks and greys
    "Black",
    "Negro",
    "Charcoal",
    "Carbon",
    "Onyx",
    "Peppercorn",
    "Caviar",
    "Graphite",
    "Grafito",
    "Grey",
    "Gray",
    "Gris",
    "Slate",
    "Pizarra",
    // metallics
    "Silver",
    "Plata",
    "Gold",
    "Dorado",
    "Metallic",
    "Metalico",
    "Copper",
    "Cobre",
    "Bronze",
    // greens
    "Green",
    "Verde",
    "Emerald",
    "Esmeralda",
    "Sage",
    "Olive",
    "Oliva",
    "Mint",
    "Menta",
    "Moss",
    "Musgo",
    "Chartreuse",
    "Forest",
    "Pistachio",
    "Pistache",
    "Ivy",
    "Hiedra",
    // yellows, reds, oranges
    "Yellow",
    "Amarillo",
    "Mustard",
    "Mostaza",
    "Ochre",
    "Ocre",
    "Red",
    "Rojo",
    "Rust",
    "Oxido",
    "Burgundy",
    "Vino",
    "Maroon",
    "Brick",
    "Ladrillo",
    "Apple",
    "Manzana",
    "Orange",
    "Naranja",
    "Peach",
    "Durazno",
    "Coral",
    "Terracotta",
    "Terracota",
    "Apricot",
    "Citrus",
    // multi
    "Multi",
    "Multicolor",
    "Rainbow",
    "Arcoiris",
    "Pastel",
    // descriptors
    "Breezy",
    "Twist",
    "Mix",
    "Bloom",
    "Haze",
    "Mist",
    "Glow",
];

/// How a [`VocabularyFile`] combines with the built-in tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyMode {
    /// Append the file's entries to the built-in tables.
    #[default]
    Extend,
    /// Use the file's tables alone.
    Replace,
}

/// On-disk YAML shape of a vocabulary file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyFile {
    #[serde(default)]
    pub mode: VocabularyMode,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub removable_tokens: Vec<String>,
}

/// Validated suffix and removable-token tables, each ordered most specific
/// first (more words, then more characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    suffixes: Vec<String>,
    removable_tokens: Vec<String>,
}

impl Vocabulary {
    /// The tables compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            suffixes: ordered(BUILTIN_SUFFIXES.iter().map(|s| fold_whitespace(s)).collect()),
            removable_tokens: ordered(
                BUILTIN_REMOVABLE_TOKENS
                    .iter()
                    .map(|s| fold_whitespace(s))
                    .collect(),
            ),
        }
    }

    /// Validates both tables and orders them most specific first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if either table is empty or holds
    /// an invalid or duplicated entry.
    pub fn new<S, T>(suffixes: S, removable_tokens: T) -> Result<Self, ConfigError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let suffixes = fold_table(suffixes);
        let removable_tokens = fold_table(removable_tokens);

        if suffixes.is_empty() {
            return Err(ConfigError::Validation(
                "suffix table must be non-empty".to_string(),
            ));
        }
        if removable_tokens.is_empty() {
            return Err(ConfigError::Validation(
                "removable token table must be non-empty".to_string(),
            ));
        }
        validate_table("suffix", &suffixes)?;
        validate_table("removable token", &removable_tokens)?;

        Ok(Self {
            suffixes: ordered(suffixes),
            removable_tokens: ordered(removable_tokens),
        })
    }

    /// Applies a vocabulary file on top of this vocabulary according to its
    /// [`VocabularyMode`].
    ///
    /// In `extend` mode, entries already present (ignoring case) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the file holds an invalid entry,
    /// repeats an entry within one table, or (in `replace` mode) leaves a
    /// table empty.
    pub fn merge(self, file: VocabularyFile) -> Result<Self, ConfigError> {
        match file.mode {
            VocabularyMode::Replace => Self::new(file.suffixes, file.removable_tokens),
            VocabularyMode::Extend => {
                let extra_suffixes = fold_table(file.suffixes);
                let extra_tokens = fold_table(file.removable_tokens);
                validate_table("suffix", &extra_suffixes)?;
                validate_table("removable token", &extra_tokens)?;

                Ok(Self {
                    suffixes: ordered(append_new(self.suffixes, extra_suffixes)),
                    removable_tokens: ordered(append_new(self.removable_tokens, extra_tokens)),
                })
            }
        }
    }

    /// Product-type suffixes, most specific first.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Color and descriptor tokens, most specific first.
    #[must_use]
    pub fn removable_tokens(&self) -> &[String] {
        &self.removable_tokens
    }

    /// Returns `true` when `s` is, as a whole, one removable token.
    #[must_use]
    pub fn is_removable_token(&self, s: &str) -> bool {
        let needle = fold_whitespace(s).to_lowercase();
        !needle.is_empty()
            && self
                .removable_tokens
                .iter()
                .any(|t| t.to_lowercase() == needle)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load a vocabulary YAML file and apply it to the built-in tables.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: VocabularyFile = serde_yaml::from_str(&content)?;
    let mode = file.mode;
    let vocabulary = Vocabulary::builtin().merge(file)?;

    tracing::info!(
        path = %path.display(),
        ?mode,
        suffixes = vocabulary.suffixes().len(),
        removable_tokens = vocabulary.removable_tokens().len(),
        "loaded vocabulary"
    );

    Ok(vocabulary)
}

/// Trims and collapses internal whitespace runs to single spaces.
#[must_use]
pub fn fold_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_table<I>(entries: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| fold_whitespace(e.as_ref()))
        .collect()
}

fn validate_table(kind: &str, entries: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind} entries must be non-empty"
            )));
        }

        if !entry.chars().any(char::is_alphanumeric) {
            return Err(ConfigError::Validation(format!(
                "{kind} '{entry}' has no alphanumeric characters"
            )));
        }

        let lower = entry.to_lowercase();
        if JOINERS.contains(&lower.as_str()) {
            return Err(ConfigError::Validation(format!(
                "{kind} '{entry}' is a joiner word"
            )));
        }

        if !seen.insert(lower) {
            return Err(ConfigError::Validation(format!(
                "duplicate {kind}: '{entry}'"
            )));
        }
    }

    Ok(())
}

fn append_new(mut base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = base.iter().map(|e| e.to_lowercase()).collect();
    for entry in extra {
        if seen.insert(entry.to_lowercase()) {
            base.push(entry);
        } else {
            tracing::debug!(entry = %entry, "vocabulary entry already present, skipping");
        }
    }
    base
}

/// Stable sort: more words first, then more characters.
fn ordered(mut entries: Vec<String>) -> Vec<String> {
    entries.sort_by(|a, b| {
        word_count(b)
            .cmp(&word_count(a))
            .then_with(|| b.chars().count().cmp(&a.chars().count()))
    });
    entries
}

fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
