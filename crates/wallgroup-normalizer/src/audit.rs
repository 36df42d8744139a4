//! Grouping audit: flags neighbouring group keys that look like one design
//! split in two, usually because a color or descriptor is missing from the
//! vocabulary.
//!
//! The audit only reports; it never changes groups.

use serde::Serialize;
use wallgroup_core::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuspectReason {
    /// One key is a prefix of the other, e.g. `dream-garden` and
    /// `dream-garden-honey`.
    Prefix,
    EditDistance { distance: usize },
}

/// Two adjacent (by sorted key) items whose groups differ but probably
/// should not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSuspect {
    pub group_a: String,
    pub name_a: String,
    pub group_b: String,
    pub name_b: String,
    pub reason: SuspectReason,
}

/// Sorts items by group key and reports each adjacent pair of distinct keys
/// that share a prefix or lie within `max_distance` edits of each other.
#[must_use]
pub fn audit_groups(items: &[CatalogItem], max_distance: usize) -> Vec<GroupSuspect> {
    let mut sorted: Vec<&CatalogItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.group_key().cmp(b.group_key()));

    let suspects: Vec<GroupSuspect> = sorted
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let (key_a, key_b) = (a.group_key(), b.group_key());
            if key_a == key_b {
                return None;
            }
            classify(key_a, key_b, max_distance).map(|reason| GroupSuspect {
                group_a: key_a.to_string(),
                name_a: a.name.clone(),
                group_b: key_b.to_string(),
                name_b: b.name.clone(),
                reason,
            })
        })
        .collect();

    tracing::info!(
        items = items.len(),
        suspects = suspects.len(),
        max_distance,
        "grouping audit complete"
    );

    suspects
}

fn classify(a: &str, b: &str, max_distance: usize) -> Option<SuspectReason> {
    if a.starts_with(b) || b.starts_with(a) {
        return Some(SuspectReason::Prefix);
    }
    let distance = strsim::levenshtein(a, b);
    (distance <= max_distance).then_some(SuspectReason::EditDistance { distance })
}
