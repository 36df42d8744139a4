//! Catalog enrichment: attaching variant groups to catalog items, and the
//! read-side queries the storefront runs over enriched catalogs.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;
use wallgroup_core::CatalogItem;

use crate::normalize::Normalizer;

/// Whether existing `group` values are trusted during enrichment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichMode {
    /// Keep any non-blank `group` already on the item.
    #[default]
    PreserveCurated,
    /// Recompute every group from the item name.
    Recompute,
}

/// Where an enriched item's `group` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    Curated,
    Inferred,
    /// The name slugged to nothing; the item id was used instead.
    IdFallback,
    Ungrouped,
}

/// Per-source counts for one enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichSummary {
    pub curated: usize,
    pub inferred: usize,
    pub id_fallback: usize,
    pub ungrouped: usize,
}

impl EnrichSummary {
    fn record(&mut self, source: GroupSource) {
        match source {
            GroupSource::Curated => self.curated += 1,
            GroupSource::Inferred => self.inferred += 1,
            GroupSource::IdFallback => self.id_fallback += 1,
            GroupSource::Ungrouped => self.ungrouped += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.curated + self.inferred + self.id_fallback + self.ungrouped
    }
}

/// Attaches a `group` to every item, preserving catalog order.
#[must_use]
pub fn enrich_catalog(
    normalizer: &Normalizer,
    items: Vec<CatalogItem>,
    mode: EnrichMode,
) -> Vec<CatalogItem> {
    enrich_catalog_with_summary(normalizer, items, mode).0
}

/// Like [`enrich_catalog`], also returning where each group came from.
#[must_use]
pub fn enrich_catalog_with_summary(
    normalizer: &Normalizer,
    items: Vec<CatalogItem>,
    mode: EnrichMode,
) -> (Vec<CatalogItem>, EnrichSummary) {
    let mut summary = EnrichSummary::default();

    let enriched: Vec<CatalogItem> = items
        .into_iter()
        .map(|item| {
            let (item, source) = enrich_item(normalizer, item, mode);
            summary.record(source);
            item
        })
        .collect();

    tracing::info!(
        items = summary.total(),
        curated = summary.curated,
        inferred = summary.inferred,
        id_fallback = summary.id_fallback,
        ungrouped = summary.ungrouped,
        ?mode,
        "catalog enriched"
    );

    (enriched, summary)
}

/// Sets the `group` of a single item and reports its source.
#[must_use]
pub fn enrich_item(
    normalizer: &Normalizer,
    mut item: CatalogItem,
    mode: EnrichMode,
) -> (CatalogItem, GroupSource) {
    if mode == EnrichMode::PreserveCurated && item.curated_group().is_some() {
        return (item, GroupSource::Curated);
    }

    let slug = normalizer.group_key(&item.name);
    if !slug.is_empty() {
        item.group = Some(slug);
        return (item, GroupSource::Inferred);
    }

    match item.id.clone().filter(|id| !id.is_empty()) {
        Some(id) => {
            tracing::debug!(name = %item.name, id = %id, "name has no slug, grouping by id");
            item.group = Some(id);
            (item, GroupSource::IdFallback)
        }
        None => {
            tracing::warn!(
                name = %item.name,
                "item has neither a sluggable name nor an id, leaving ungrouped"
            );
            item.group = None;
            (item, GroupSource::Ungrouped)
        }
    }
}

/// Items sharing one group key. Always has at least one member.
#[derive(Debug, Clone, Serialize)]
pub struct VariantGroup<'a> {
    key: &'a str,
    members: Vec<&'a CatalogItem>,
}

impl<'a> VariantGroup<'a> {
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    #[must_use]
    pub fn members(&self) -> &[&'a CatalogItem] {
        &self.members
    }

    /// The first member in catalog order, shown in collection grids.
    #[must_use]
    pub fn representative(&self) -> &'a CatalogItem {
        self.members[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Never true for groups built by [`group_catalog`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Buckets items by [`CatalogItem::group_key`] in a single pass.
///
/// Groups appear in order of their first member; members keep catalog order.
#[must_use]
pub fn group_catalog(items: &[CatalogItem]) -> Vec<VariantGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<VariantGroup<'_>> = Vec::new();

    for item in items {
        let key = item.group_key();
        match index.entry(key) {
            Entry::Occupied(slot) => groups[*slot.get()].members.push(item),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(VariantGroup {
                    key,
                    members: vec![item],
                });
            }
        }
    }

    groups
}

/// One representative per group, in catalog order.
#[must_use]
pub fn dedupe_by_group(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    group_catalog(items)
        .iter()
        .map(VariantGroup::representative)
        .collect()
}

/// The other members of the group of the item with `id`, excluding the item
/// itself. Empty when the item is unknown or carries no group.
#[must_use]
pub fn other_variants<'a>(items: &'a [CatalogItem], id: &str) -> Vec<&'a CatalogItem> {
    let Some(group) = items
        .iter()
        .find(|item| item.id.as_deref() == Some(id))
        .and_then(CatalogItem::curated_group)
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.curated_group() == Some(group) && item.id.as_deref() != Some(id))
        .collect()
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
