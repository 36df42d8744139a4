//! Catalog command handlers for the CLI.
//!
//! These are called from `main` once config and the normalizer are built.
//! Catalogs are JSON arrays of items; unknown item fields pass through.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use wallgroup_core::CatalogItem;
use wallgroup_normalizer::{
    audit_groups, enrich_catalog, enrich_catalog_with_summary, group_catalog, EnrichMode,
    Normalizer,
};

/// Print `name<TAB>base name<TAB>slug` for each name.
pub(crate) fn run_normalize(
    normalizer: &Normalizer,
    names: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for name in names {
        let base = normalizer.normalize(name);
        let slug = wallgroup_normalizer::slugify(&base);
        writeln!(out, "{name}\t{base}\t{slug}")?;
    }
    Ok(())
}

/// Enrich the catalog at `input` and write it to `output` (stdout if `None`).
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed, or the output
/// cannot be written.
pub(crate) fn run_enrich(
    normalizer: &Normalizer,
    input: &Path,
    output: Option<&Path>,
    recompute: bool,
) -> anyhow::Result<()> {
    let items = read_catalog(input)?;
    let mode = if recompute {
        EnrichMode::Recompute
    } else {
        EnrichMode::PreserveCurated
    };

    let (enriched, summary) = enrich_catalog_with_summary(normalizer, items, mode);
    if summary.ungrouped > 0 {
        eprintln!(
            "warning: {} of {} items could not be grouped",
            summary.ungrouped,
            summary.total()
        );
    }

    write_json(&enriched, output)
}

/// Print each variant group with at least `min_size` members.
pub(crate) fn run_groups(
    normalizer: &Normalizer,
    input: &Path,
    min_size: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let items = enrich_catalog(normalizer, read_catalog(input)?, EnrichMode::PreserveCurated);
    let groups = group_catalog(&items);

    let mut shown = 0usize;
    for group in groups.iter().filter(|g| g.len() >= min_size) {
        writeln!(out, "{} ({})", group.key(), group.len())?;
        for member in group.members() {
            writeln!(out, "  {}", member.name)?;
        }
        shown += 1;
    }

    tracing::info!(
        groups = groups.len(),
        shown,
        min_size,
        "listed variant groups"
    );
    Ok(())
}

/// Recompute every group and write the audit suspects as JSON.
pub(crate) fn run_audit(
    normalizer: &Normalizer,
    input: &Path,
    output: Option<&Path>,
    max_distance: usize,
) -> anyhow::Result<()> {
    let items = enrich_catalog(normalizer, read_catalog(input)?, EnrichMode::Recompute);
    let suspects = audit_groups(&items, max_distance);
    write_json(&suspects, output)
}

pub(crate) fn read_catalog(path: &Path) -> anyhow::Result<Vec<CatalogItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = items.len(), "read catalog");
    Ok(items)
}

fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().lock().write_all(json.as_bytes())?,
    }
    Ok(())
}
