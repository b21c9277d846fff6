//! Typed fixtures shared by unit tests

use crate::ids::{ExampleId, PatternId};
use crate::models::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn pattern(id: &str, slug: &str, sort_order: i64, gdpr_tags: &[&str], example_ids: &[&str]) -> Pattern {
    Pattern {
        id: PatternId::from(id),
        slug: slug.to_string(),
        name: format!("Pattern {}", slug),
        sort_order,
        definition: String::new(),
        goal: String::new(),
        gdpr_basis: GdprBasis {
            raw: String::new(),
            articles: Vec::new(),
            gdpr_tags: strings(gdpr_tags),
        },
        observable_ui_conditions: ObservableUiConditions {
            raw: String::new(),
            ui_evidence_tags: Vec::new(),
        },
        use_cases: RawText { raw: String::new() },
        evidence: Evidence {
            use_cases: EvidenceBlock {
                raw: String::new(),
                citations: Vec::new(),
            },
            pitfalls: EvidenceBlock {
                raw: String::new(),
                citations: Vec::new(),
            },
        },
        pitfalls: Pitfalls {
            raw: String::new(),
            items: Vec::new(),
        },
        heuristics: Heuristics {
            considerations_raw: String::new(),
            considerations: Vec::new(),
            source_raw: String::new(),
            why_these_matter: String::new(),
        },
        design_guidance: DesignGuidance {
            key_design_expectations_abstract: String::new(),
            design_choices_that_support_heuristics: String::new(),
            evaluative_questions_raw: String::new(),
            evaluative_questions: Vec::new(),
        },
        example_ids: example_ids.iter().map(|id| ExampleId::from(*id)).collect(),
    }
}

pub fn example(id: &str, pattern_ids: &[&str]) -> Example {
    Example {
        id: ExampleId::from(id),
        name: format!("Example {}", id),
        url: "https://example.org".to_string(),
        figma_template_url: None,
        general_design_template_collection: None,
        pattern_ids: pattern_ids.iter().map(|id| PatternId::from(*id)).collect(),
    }
}

pub fn catalog_with(patterns: Vec<Pattern>, examples: Vec<Example>) -> Catalog {
    Catalog {
        meta: CatalogMeta {
            schema_version: "1.0.0".to_string(),
            generated_at: "2025-01-01T00:00:00Z".to_string(),
            source: CatalogSource {
                patterns_csv: "patterns.csv".to_string(),
                examples_csv: "examples.csv".to_string(),
            },
        },
        patterns,
        examples,
        indexes: CatalogIndexes::default(),
    }
}
