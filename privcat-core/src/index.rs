use crate::ids::{ExampleId, PatternId};
use crate::models::{Catalog, Example, Pattern};
use std::collections::HashMap;

/// A reference whose target is missing from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// A pattern lists an example id that does not exist
    Example { from: PatternId, to: ExampleId },
    /// An example lists a pattern id that does not exist
    Pattern { from: ExampleId, to: PatternId },
}

/// Lookup structures built once over a validated catalog
///
/// Maps hold positions into the catalog's `patterns` / `examples` vectors, so
/// the index is only meaningful together with the catalog it was built from.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    pattern_by_id: HashMap<PatternId, usize>,
    pattern_by_slug: HashMap<String, usize>,
    example_by_id: HashMap<ExampleId, usize>,
    example_ids_by_pattern_id: HashMap<PatternId, Vec<ExampleId>>,
    pattern_ids_by_example_id: HashMap<ExampleId, Vec<PatternId>>,
    dangling: Vec<DanglingReference>,
}

impl CatalogIndex {
    /// One pass over patterns, one over examples
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = CatalogIndex {
            pattern_by_id: HashMap::with_capacity(catalog.patterns.len()),
            pattern_by_slug: HashMap::with_capacity(catalog.patterns.len()),
            example_by_id: HashMap::with_capacity(catalog.examples.len()),
            example_ids_by_pattern_id: HashMap::with_capacity(catalog.patterns.len()),
            pattern_ids_by_example_id: HashMap::with_capacity(catalog.examples.len()),
            dangling: Vec::new(),
        };

        for (pos, pattern) in catalog.patterns.iter().enumerate() {
            index.pattern_by_id.insert(pattern.id.clone(), pos);
            index.pattern_by_slug.insert(pattern.slug.clone(), pos);
            index
                .example_ids_by_pattern_id
                .insert(pattern.id.clone(), pattern.example_ids.clone());
        }

        for (pos, example) in catalog.examples.iter().enumerate() {
            index.example_by_id.insert(example.id.clone(), pos);
            index
                .pattern_ids_by_example_id
                .insert(example.id.clone(), example.pattern_ids.clone());
        }

        index.dangling = index.find_dangling(catalog);
        for reference in &index.dangling {
            match reference {
                DanglingReference::Example { from, to } => {
                    tracing::warn!(pattern = %from, example = %to, "pattern references unknown example");
                }
                DanglingReference::Pattern { from, to } => {
                    tracing::warn!(example = %from, pattern = %to, "example references unknown pattern");
                }
            }
        }

        index
    }

    fn find_dangling(&self, catalog: &Catalog) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for pattern in &catalog.patterns {
            for example_id in &pattern.example_ids {
                if !self.example_by_id.contains_key(example_id) {
                    dangling.push(DanglingReference::Example {
                        from: pattern.id.clone(),
                        to: example_id.clone(),
                    });
                }
            }
        }

        for example in &catalog.examples {
            for pattern_id in &example.pattern_ids {
                if !self.pattern_by_id.contains_key(pattern_id) {
                    dangling.push(DanglingReference::Pattern {
                        from: example.id.clone(),
                        to: pattern_id.clone(),
                    });
                }
            }
        }

        dangling
    }

    /// References dropped during hydration
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    pub fn pattern_by_id<'a>(&self, catalog: &'a Catalog, id: &str) -> Option<&'a Pattern> {
        self.pattern_by_id
            .get(id)
            .and_then(|&pos| catalog.patterns.get(pos))
    }

    pub fn pattern_by_slug<'a>(&self, catalog: &'a Catalog, slug: &str) -> Option<&'a Pattern> {
        self.pattern_by_slug
            .get(slug)
            .and_then(|&pos| catalog.patterns.get(pos))
    }

    pub fn example_by_id<'a>(&self, catalog: &'a Catalog, id: &str) -> Option<&'a Example> {
        self.example_by_id
            .get(id)
            .and_then(|&pos| catalog.examples.get(pos))
    }

    /// Example ids declared by a pattern, verbatim
    pub fn example_ids_for_pattern(&self, pattern_id: &str) -> &[ExampleId] {
        self.example_ids_by_pattern_id
            .get(pattern_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Pattern ids declared by an example, verbatim
    pub fn pattern_ids_for_example(&self, example_id: &str) -> &[PatternId] {
        self.pattern_ids_by_example_id
            .get(example_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Examples of a pattern in declared order; unknown ids are skipped
    pub fn examples_for_pattern<'a>(&self, catalog: &'a Catalog, pattern_id: &str) -> Vec<&'a Example> {
        self.example_ids_for_pattern(pattern_id)
            .iter()
            .filter_map(|id| self.example_by_id(catalog, id.as_str()))
            .collect()
    }

    /// Patterns of an example in declared order; unknown ids are skipped
    pub fn patterns_for_example<'a>(&self, catalog: &'a Catalog, example_id: &str) -> Vec<&'a Pattern> {
        self.pattern_ids_for_example(example_id)
            .iter()
            .filter_map(|id| self.pattern_by_id(catalog, id.as_str()))
            .collect()
    }
}
