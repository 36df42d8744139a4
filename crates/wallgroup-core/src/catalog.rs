use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A single catalog entry as stored in the enriched catalog snapshot.
///
/// Only the fields the grouping engine reads are typed; everything else
/// (price, images, dimensions, ...) rides along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stored catalogs mix string and numeric ids; both load as a string.
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Raw product title exactly as ingested, e.g.
    /// `"Dream Garden Teal Peel & Stick Wallpaper"`.
    pub name: String,
    /// Variant group slug. Either curated by hand or attached by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    }))
}

impl CatalogItem {
    /// Builds an item with only a name, as used by tests and the CLI.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            group: None,
            extra: Map::new(),
        }
    }

    /// Returns the existing group when it is present and non-blank.
    ///
    /// A blank string is treated as absent so it never blocks inference.
    #[must_use]
    pub fn curated_group(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.trim().is_empty())
    }

    /// Key used to bucket items into variant groups: the group, else the id,
    /// else the raw name.
    #[must_use]
    pub fn group_key(&self) -> &str {
        self.curated_group()
            .or_else(|| self.id.as_deref().filter(|id| !id.is_empty()))
            .unwrap_or(&self.name)
    }
}
