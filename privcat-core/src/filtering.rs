use crate::models::{Catalog, Example, Pattern};
use crate::sorting::sort_by_display_order;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Query over the catalog
/// Every listed facet value is required (AND within and across facets)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub gdpr_tags: Vec<String>,
    pub ui_evidence_tags: Vec<String>,
    pub heuristics: Vec<String>,
    pub search_query: String,
    /// Reserved, always empty for now
    #[serde(default)]
    pub template_collections: Vec<String>,
}

impl FilterState {
    pub fn with_gdpr_tag(mut self, tag: impl Into<String>) -> Self {
        self.gdpr_tags.push(tag.into());
        self
    }

    pub fn with_ui_evidence_tag(mut self, tag: impl Into<String>) -> Self {
        self.ui_evidence_tags.push(tag.into());
        self
    }

    pub fn with_heuristic(mut self, heuristic: impl Into<String>) -> Self {
        self.heuristics.push(heuristic.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }
}

/// The canonical "no filters applied" state
pub fn create_empty_filter_state() -> FilterState {
    FilterState::default()
}

/// Patterns and examples surviving a filter, borrowed from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult<'a> {
    pub patterns: Vec<&'a Pattern>,
    pub examples: Vec<&'a Example>,
}

/// Parse facet filter strings in the format "key=value" into the filter state
/// Keys are `gdpr`, `ui` and `heuristic`; entries that are malformed or use
/// another key are returned untouched
pub fn parse_facet_filters(facet_strings: &[String], filters: &mut FilterState) -> Vec<String> {
    let mut rejected = Vec::new();

    for facet_str in facet_strings {
        let Some((key, value)) = facet_str.split_once('=') else {
            rejected.push(facet_str.clone());
            continue;
        };

        let value = value.trim().to_string();
        match key.trim() {
            "gdpr" | "gdprTags" => filters.gdpr_tags.push(value),
            "ui" | "uiEvidenceTags" => filters.ui_evidence_tags.push(value),
            "heuristic" | "heuristics" => filters.heuristics.push(value),
            _ => rejected.push(facet_str.clone()),
        }
    }

    rejected
}

/// Apply filters to the catalog
/// Patterns come back in `sort_order`; examples in catalog order, each once,
/// when linked to at least one surviving pattern
pub fn apply_filters<'a>(catalog: &'a Catalog, filters: &FilterState) -> FilterResult<'a> {
    let query = normalize_query(&filters.search_query);

    let mut patterns: Vec<&Pattern> = catalog
        .patterns
        .iter()
        .filter(|pattern| matches_normalized(pattern, &query, filters))
        .collect();
    sort_by_display_order(&mut patterns);

    let allowed_pattern_ids: HashSet<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
    let mut seen_example_ids = HashSet::new();

    let examples: Vec<&Example> = catalog
        .examples
        .iter()
        .filter(|example| {
            if seen_example_ids.contains(example.id.as_str()) {
                return false;
            }
            let matches = example
                .pattern_ids
                .iter()
                .any(|pid| allowed_pattern_ids.contains(pid.as_str()));
            if matches {
                seen_example_ids.insert(example.id.as_str());
            }
            matches
        })
        .collect();

    tracing::debug!(
        patterns = patterns.len(),
        examples = examples.len(),
        "applied filters"
    );

    FilterResult { patterns, examples }
}

/// Check if a pattern matches the given filters
/// AND logic between search and the three facets
pub fn matches_filters(pattern: &Pattern, filters: &FilterState) -> bool {
    matches_normalized(pattern, &normalize_query(&filters.search_query), filters)
}

fn matches_normalized(pattern: &Pattern, query: &str, filters: &FilterState) -> bool {
    matches_search(pattern, query)
        && includes_all(pattern.gdpr_tags(), &filters.gdpr_tags)
        && includes_all(pattern.ui_evidence_tags(), &filters.ui_evidence_tags)
        && includes_all(pattern.considerations(), &filters.heuristics)
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Substring search over the pattern's descriptive text; `query` must already be normalized
pub fn matches_search(pattern: &Pattern, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let haystack = [
        pattern.name.as_str(),
        pattern.definition.as_str(),
        pattern.goal.as_str(),
        pattern.gdpr_basis.raw.as_str(),
        pattern.observable_ui_conditions.raw.as_str(),
        pattern.heuristics.considerations_raw.as_str(),
        pattern.design_guidance.evaluative_questions_raw.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    haystack.contains(query)
}

/// Every needle present in the haystack; no needles always passes
pub fn includes_all(haystack: &[String], needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }

    let available: HashSet<&str> = haystack.iter().map(String::as_str).collect();
    needles.iter().all(|needle| available.contains(needle.as_str()))
}

/// Check if any filter is set
pub fn has_filters(filters: &FilterState) -> bool {
    !filters.gdpr_tags.is_empty()
        || !filters.ui_evidence_tags.is_empty()
        || !filters.heuristics.is_empty()
        || !filters.search_query.trim().is_empty()
}
