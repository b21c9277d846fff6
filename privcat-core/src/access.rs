use crate::error::CatalogError;
use crate::filtering::{apply_filters, FilterResult, FilterState};
use crate::index::{CatalogIndex, DanglingReference};
use crate::models::{Catalog, Example, Pattern};
use crate::options::LoadOptions;
use crate::validation::validate_catalog;
use serde_json::Value;

/// A validated catalog bundled with its lookup indices
///
/// Immutable once built; share it behind an `Arc` and rebuild a fresh one to
/// pick up a new document.
#[derive(Debug, Clone)]
pub struct CatalogAccess {
    catalog: Catalog,
    index: CatalogIndex,
}

impl CatalogAccess {
    pub fn new(catalog: Catalog) -> Self {
        let index = CatalogIndex::build(&catalog);
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.catalog.patterns
    }

    pub fn examples(&self) -> &[Example] {
        &self.catalog.examples
    }

    pub fn pattern_by_slug(&self, slug: &str) -> Option<&Pattern> {
        self.index.pattern_by_slug(&self.catalog, slug)
    }

    pub fn pattern_by_id(&self, id: &str) -> Option<&Pattern> {
        self.index.pattern_by_id(&self.catalog, id)
    }

    pub fn example_by_id(&self, id: &str) -> Option<&Example> {
        self.index.example_by_id(&self.catalog, id)
    }

    pub fn examples_for_pattern(&self, pattern_id: &str) -> Vec<&Example> {
        self.index.examples_for_pattern(&self.catalog, pattern_id)
    }

    pub fn patterns_for_example(&self, example_id: &str) -> Vec<&Pattern> {
        self.index.patterns_for_example(&self.catalog, example_id)
    }

    pub fn apply_filters(&self, filters: &FilterState) -> FilterResult<'_> {
        apply_filters(&self.catalog, filters)
    }

    pub fn dangling_references(&self) -> &[DanglingReference] {
        self.index.dangling_references()
    }
}

/// Validate a parsed document and build its indices
/// Never returns a partially built catalog
pub fn load_catalog(document: &Value, options: &LoadOptions) -> Result<CatalogAccess, CatalogError> {
    let catalog = validate_catalog(document, options)?;
    let access = CatalogAccess::new(catalog);

    tracing::debug!(
        schema_version = %access.catalog.meta.schema_version,
        patterns = access.catalog.patterns.len(),
        examples = access.catalog.examples.len(),
        dangling = access.dangling_references().len(),
        "loaded catalog"
    );

    Ok(access)
}
