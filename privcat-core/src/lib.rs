// Public modules
pub mod access;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod ids;
pub mod index;
pub mod io;
pub mod models;
pub mod options;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod store;
pub mod tags;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use access::{load_catalog, CatalogAccess};
pub use error::{CatalogError, FieldError, ValidationErrors};
pub use filtering::{
    apply_filters, create_empty_filter_state, has_filters, includes_all, matches_filters,
    matches_search, parse_facet_filters, FilterResult, FilterState,
};
pub use grouping::{article_numbers_from_tags, group_tags_by_article, ArticleGroup};
pub use ids::{ExampleId, PatternId};
pub use index::{CatalogIndex, DanglingReference};
pub use io::{load_catalog_from_path, load_catalog_from_reader, load_catalog_from_str};
pub use models::{
    sort_order_from_number, Catalog, CatalogIndexes, CatalogMeta, CatalogSource, DesignGuidance,
    Evidence, EvidenceBlock, Example, GdprArticle, GdprBasis, Heuristics, ObservableUiConditions,
    Pattern, PitfallItem, Pitfalls, RawText, RiskLevel,
};
pub use options::{LoadOptions, ReferencePolicy};
pub use schema::catalog_schema;
pub use schema_validation::validate_against_schema;
pub use sorting::{compare_article_numbers, compare_labels, normalize_for_sorting, sort_by_display_order};
pub use store::SharedCatalog;
pub use tags::{
    article_title, article_ui_translation, article_url, build_tag_counts, expectation_only_label,
    format_expectation_label, format_gdpr_tag, parse_gdpr_tag, tag_display_label,
    FormattedGdprTag, ParsedGdprTag, QuickStartPreset, QUICK_START_PRESETS,
};
pub use validation::{validate, validate_catalog};
