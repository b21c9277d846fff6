use crate::error::FieldError;
use serde_json::Value;

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every violation found if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<FieldError>> {
    // Compile the JSON Schema
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![FieldError::new("schema", format!("Schema compilation error: {}", e))])?;

    let errors: Vec<FieldError> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            FieldError::new(location, error.to_string())
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
