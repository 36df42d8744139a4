pub mod audit;
pub mod enrich;
pub mod error;
pub mod normalize;
mod patterns;
pub mod slug;

pub use audit::{audit_groups, GroupSuspect, SuspectReason};
pub use enrich::{
    dedupe_by_group, enrich_catalog, enrich_catalog_with_summary, enrich_item, group_catalog,
    other_variants, EnrichMode, EnrichSummary, GroupSource, VariantGroup,
};
pub use error::NormalizerError;
pub use normalize::{normalize, Normalizer, DEFAULT_MAX_PASSES};
pub use slug::slugify;
