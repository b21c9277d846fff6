use crate::ids::{ExampleId, PatternId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub meta: CatalogMeta,
    pub patterns: Vec<Pattern>,
    pub examples: Vec<Example>,
    pub indexes: CatalogIndexes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    pub schema_version: String,
    /// ISO 8601 timestamp, kept verbatim
    pub generated_at: String,
    pub source: CatalogSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSource {
    pub patterns_csv: String,
    pub examples_csv: String,
}

/// Deduplicated vocabularies used to drive filter widgets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndexes {
    pub gdpr_tags: Vec<String>,
    pub ui_evidence_tags: Vec<String>,
    pub heuristics: Vec<String>,
    /// Currently empty in source data
    pub template_collections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprArticle {
    /// Display reference such as "Art. 12"
    pub article_ref: String,
    pub article_number: String,
    pub title: String,
    pub url: Option<String>,
    pub gdpr_tag_expectations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprBasis {
    pub raw: String,
    pub articles: Vec<GdprArticle>,
    pub gdpr_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservableUiConditions {
    pub raw: String,
    pub ui_evidence_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawText {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBlock {
    pub raw: String,
    pub citations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub use_cases: EvidenceBlock,
    pub pitfalls: EvidenceBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitfallItem {
    /// e.g. "pat-001-pit-01"
    pub id: String,
    pub text: String,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitfalls {
    pub raw: String,
    pub items: Vec<PitfallItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heuristics {
    pub considerations_raw: String,
    pub considerations: Vec<String>,
    pub source_raw: String,
    pub why_these_matter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignGuidance {
    pub key_design_expectations_abstract: String,
    pub design_choices_that_support_heuristics: String,
    pub evaluative_questions_raw: String,
    pub evaluative_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub id: PatternId,
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_sort_order")]
    pub sort_order: i64,
    pub definition: String,
    pub goal: String,
    pub gdpr_basis: GdprBasis,
    pub observable_ui_conditions: ObservableUiConditions,
    pub use_cases: RawText,
    pub evidence: Evidence,
    pub pitfalls: Pitfalls,
    pub heuristics: Heuristics,
    pub design_guidance: DesignGuidance,
    pub example_ids: Vec<ExampleId>,
}

impl Pattern {
    /// Flattened GDPR tags of this pattern
    pub fn gdpr_tags(&self) -> &[String] {
        &self.gdpr_basis.gdpr_tags
    }

    pub fn ui_evidence_tags(&self) -> &[String] {
        &self.observable_ui_conditions.ui_evidence_tags
    }

    pub fn considerations(&self) -> &[String] {
        &self.heuristics.considerations
    }
}

/// Integer value of a JSON number, accepting integral floats such as `2.0`
///
/// Returns `None` for fractional values and for values outside the `i64` range.
pub fn sort_order_from_number(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }

    let value = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn deserialize_sort_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    sort_order_from_number(&number).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "sortOrder {} is not an integer in the 64-bit range",
            number
        ))
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: ExampleId,
    pub name: String,
    /// May hold several whitespace-separated URLs
    pub url: String,
    pub figma_template_url: Option<String>,
    pub general_design_template_collection: Option<String>,
    pub pattern_ids: Vec<PatternId>,
}

impl Example {
    /// Split the `url` field into its individual links
    pub fn urls(&self) -> Vec<&str> {
        self.url.split_whitespace().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_order_accepts_integral_floats() {
        assert_eq!(sort_order_from_number(&Number::from(7)), Some(7));
        assert_eq!(sort_order_from_number(&Number::from_f64(2.0).unwrap()), Some(2));
        assert_eq!(sort_order_from_number(&Number::from_f64(-3.0).unwrap()), Some(-3));
        assert_eq!(sort_order_from_number(&Number::from_f64(2.5).unwrap()), None);
        assert_eq!(sort_order_from_number(&Number::from_f64(1e20).unwrap()), None);
        assert_eq!(sort_order_from_number(&Number::from(u64::MAX)), None);
    }

    #[test]
    fn test_example_urls_split_on_whitespace() {
        let example: Example = serde_json::from_value(json!({
            "id": "ex-001",
            "name": "Shop",
            "url": "https://a.example/one \n https://b.example/two",
            "figmaTemplateUrl": null,
            "generalDesignTemplateCollection": null,
            "patternIds": ["pat-001"]
        }))
        .unwrap();

        assert_eq!(
            example.urls(),
            vec!["https://a.example/one", "https://b.example/two"]
        );
        assert_eq!(example.pattern_ids, vec![PatternId::from("pat-001")]);
    }

    #[test]
    fn test_risk_level_wire_format() {
        let item: PitfallItem = serde_json::from_value(json!({
            "id": "pat-001-pit-01",
            "text": "Hidden toggle",
            "riskLevel": "high"
        }))
        .unwrap();
        assert_eq!(item.risk_level, RiskLevel::High);
        assert_eq!(
            serde_json::to_value(&item).unwrap()["riskLevel"],
            json!("high")
        );
    }
}
