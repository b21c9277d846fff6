use serde_json::{json, Value};

pub const PATTERN_ID_PATTERN: &str = r"^pat-\d{3}$";
pub const EXAMPLE_ID_PATTERN: &str = r"^ex-\d{3}$";

/// Build the JSON Schema describing a catalog document
///
/// Every field is required; only `url`, `figmaTemplateUrl` and
/// `generalDesignTemplateCollection` may be null.
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Privacy UI Pattern Catalog",
        "type": "object",
        "properties": {
            "meta": object(json!({
                "schemaVersion": string(),
                "generatedAt": string(),
                "source": object(json!({
                    "patternsCsv": string(),
                    "examplesCsv": string()
                }))
            })),
            "patterns": {
                "type": "array",
                "items": pattern_schema()
            },
            "examples": {
                "type": "array",
                "items": example_schema()
            },
            "indexes": object(json!({
                "gdprTags": string_array(),
                "uiEvidenceTags": string_array(),
                "heuristics": string_array(),
                "templateCollections": string_array()
            }))
        },
        "required": ["meta", "patterns", "examples", "indexes"]
    })
}

fn pattern_schema() -> Value {
    object(json!({
        "id": id_string(PATTERN_ID_PATTERN),
        "slug": string(),
        "name": string(),
        "sortOrder": { "type": "integer" },
        "definition": string(),
        "goal": string(),
        "gdprBasis": object(json!({
            "raw": string(),
            "articles": {
                "type": "array",
                "items": object(json!({
                    "articleRef": string(),
                    "articleNumber": string(),
                    "title": string(),
                    "url": nullable_string(),
                    "gdprTagExpectations": string_array()
                }))
            },
            "gdprTags": string_array()
        })),
        "observableUiConditions": object(json!({
            "raw": string(),
            "uiEvidenceTags": string_array()
        })),
        "useCases": object(json!({ "raw": string() })),
        "evidence": object(json!({
            "useCases": evidence_block(),
            "pitfalls": evidence_block()
        })),
        "pitfalls": object(json!({
            "raw": string(),
            "items": {
                "type": "array",
                "items": object(json!({
                    "id": string(),
                    "text": string(),
                    "riskLevel": {
                        "type": "string",
                        "enum": ["low", "medium", "high"]
                    }
                }))
            }
        })),
        "heuristics": object(json!({
            "considerationsRaw": string(),
            "considerations": string_array(),
            "sourceRaw": string(),
            "whyTheseMatter": string()
        })),
        "designGuidance": object(json!({
            "keyDesignExpectationsAbstract": string(),
            "designChoicesThatSupportHeuristics": string(),
            "evaluativeQuestionsRaw": string(),
            "evaluativeQuestions": string_array()
        })),
        "exampleIds": {
            "type": "array",
            "items": id_string(EXAMPLE_ID_PATTERN)
        }
    }))
}

fn example_schema() -> Value {
    object(json!({
        "id": id_string(EXAMPLE_ID_PATTERN),
        "name": string(),
        "url": string(),
        "figmaTemplateUrl": nullable_string(),
        "generalDesignTemplateCollection": nullable_string(),
        "patternIds": {
            "type": "array",
            "items": id_string(PATTERN_ID_PATTERN)
        }
    }))
}

fn evidence_block() -> Value {
    object(json!({
        "raw": string(),
        "citations": string_array()
    }))
}

/// Object schema whose every listed property is required
fn object(properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn string() -> Value {
    json!({ "type": "string" })
}

fn nullable_string() -> Value {
    json!({ "type": ["string", "null"] })
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn id_string(pattern: &str) -> Value {
    json!({ "type": "string", "pattern": pattern })
}
