use crate::error::{FieldError, ValidationErrors};
use crate::models::{sort_order_from_number, Catalog, CatalogIndexes};
use crate::options::{LoadOptions, ReferencePolicy};
use crate::schema::catalog_schema;
use crate::schema_validation::validate_against_schema;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Validate a raw catalog document and produce the typed catalog
///
/// Structural violations (missing fields, wrong types, malformed ids, unknown
/// risk levels) are all reported together. Only a structurally valid document
/// is checked for duplicate ids and slugs, and, under
/// [`ReferencePolicy::Strict`], for dangling references.
pub fn validate_catalog(raw: &Value, options: &LoadOptions) -> Result<Catalog, ValidationErrors> {
    let mut structural = validate_against_schema(&catalog_schema(), raw).err().unwrap_or_default();
    validate_sort_orders(raw, &mut structural);
    if let Some(errors) = ValidationErrors::from_vec(structural) {
        return Err(errors);
    }

    let catalog: Catalog = serde_json::from_value(raw.clone())
        .map_err(|e| ValidationErrors::single(FieldError::new("root", e.to_string())))?;

    let mut errors = Vec::new();
    validate_unique_ids(&catalog, &mut errors);

    if options.reference_policy == ReferencePolicy::Strict {
        validate_references(&catalog, &mut errors);
    }

    if let Some(errors) = ValidationErrors::from_vec(errors) {
        return Err(errors);
    }

    warn_on_vocabulary_drift(&catalog);

    Ok(catalog)
}

/// Validate with the default (lenient) options
pub fn validate(raw: &Value) -> Result<Catalog, ValidationErrors> {
    validate_catalog(raw, &LoadOptions::default())
}

/// Report integral `sortOrder` values that do not fit in an `i64`
///
/// Fractional values are left to the schema, which rejects them per field.
pub fn validate_sort_orders(raw: &Value, errors: &mut Vec<FieldError>) {
    let Some(patterns) = raw.get("patterns").and_then(Value::as_array) else {
        return;
    };

    for (idx, pattern) in patterns.iter().enumerate() {
        let Some(Value::Number(number)) = pattern.get("sortOrder") else {
            continue;
        };
        let integral = number.as_f64().is_some_and(|v| v.fract() == 0.0);
        if integral && sort_order_from_number(number).is_none() {
            errors.push(FieldError::new(
                format!("/patterns/{}/sortOrder", idx),
                format!("sortOrder {} is outside the 64-bit integer range", number),
            ));
        }
    }
}

pub fn validate_unique_ids(catalog: &Catalog, errors: &mut Vec<FieldError>) {
    let mut pattern_ids = HashMap::new();
    let mut slugs = HashMap::new();

    for (idx, pattern) in catalog.patterns.iter().enumerate() {
        if let Some(first) = pattern_ids.insert(pattern.id.as_str(), idx) {
            pattern_ids.insert(pattern.id.as_str(), first);
            errors.push(FieldError::new(
                format!("/patterns/{}/id", idx),
                format!(
                    "duplicate pattern id '{}' (first used at /patterns/{})",
                    pattern.id, first
                ),
            ));
        }

        if let Some(first) = slugs.insert(pattern.slug.as_str(), idx) {
            slugs.insert(pattern.slug.as_str(), first);
            errors.push(FieldError::new(
                format!("/patterns/{}/slug", idx),
                format!(
                    "duplicate pattern slug '{}' (first used at /patterns/{})",
                    pattern.slug, first
                ),
            ));
        }
    }

    let mut example_ids = HashMap::new();
    for (idx, example) in catalog.examples.iter().enumerate() {
        if let Some(first) = example_ids.insert(example.id.as_str(), idx) {
            example_ids.insert(example.id.as_str(), first);
            errors.push(FieldError::new(
                format!("/examples/{}/id", idx),
                format!(
                    "duplicate example id '{}' (first used at /examples/{})",
                    example.id, first
                ),
            ));
        }
    }
}

pub fn validate_references(catalog: &Catalog, errors: &mut Vec<FieldError>) {
    let pattern_ids: HashSet<&str> = catalog.patterns.iter().map(|p| p.id.as_str()).collect();
    let example_ids: HashSet<&str> = catalog.examples.iter().map(|e| e.id.as_str()).collect();

    for (idx, pattern) in catalog.patterns.iter().enumerate() {
        for (ref_idx, example_id) in pattern.example_ids.iter().enumerate() {
            if !example_ids.contains(example_id.as_str()) {
                errors.push(FieldError::new(
                    format!("/patterns/{}/exampleIds/{}", idx, ref_idx),
                    format!("references unknown example {}", example_id),
                ));
            }
        }
    }

    for (idx, example) in catalog.examples.iter().enumerate() {
        for (ref_idx, pattern_id) in example.pattern_ids.iter().enumerate() {
            if !pattern_ids.contains(pattern_id.as_str()) {
                errors.push(FieldError::new(
                    format!("/examples/{}/patternIds/{}", idx, ref_idx),
                    format!("references unknown pattern {}", pattern_id),
                ));
            }
        }
    }
}

/// Vocabulary problems found in `indexes`, as (index name, value, problem)
pub fn vocabulary_drift(catalog: &Catalog) -> Vec<(&'static str, String, &'static str)> {
    let CatalogIndexes {
        gdpr_tags,
        ui_evidence_tags,
        heuristics,
        ..
    } = &catalog.indexes;

    let mut drift = Vec::new();
    check_vocabulary(
        "gdprTags",
        gdpr_tags,
        catalog.patterns.iter().flat_map(|p| p.gdpr_tags()),
        &mut drift,
    );
    check_vocabulary(
        "uiEvidenceTags",
        ui_evidence_tags,
        catalog.patterns.iter().flat_map(|p| p.ui_evidence_tags()),
        &mut drift,
    );
    check_vocabulary(
        "heuristics",
        heuristics,
        catalog.patterns.iter().flat_map(|p| p.considerations()),
        &mut drift,
    );
    drift
}

fn check_vocabulary<'a>(
    index_name: &'static str,
    vocabulary: &[String],
    used: impl Iterator<Item = &'a String>,
    drift: &mut Vec<(&'static str, String, &'static str)>,
) {
    let mut seen = HashSet::new();
    for value in vocabulary {
        if !seen.insert(value.as_str()) {
            drift.push((index_name, value.clone(), "duplicate vocabulary entry"));
        }
    }

    let mut reported = HashSet::new();
    for value in used {
        if !seen.contains(value.as_str()) && reported.insert(value.as_str()) {
            drift.push((index_name, value.clone(), "used by a pattern but missing from index"));
        }
    }
}

fn warn_on_vocabulary_drift(catalog: &Catalog) {
    for (index_name, value, problem) in vocabulary_drift(catalog) {
        tracing::warn!(index = index_name, value = %value, "{}", problem);
    }
}
