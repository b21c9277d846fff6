use privcat_core::CatalogError;
use std::io::ErrorKind;
use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(error: &CatalogError, path: &Path) -> (String, String, String) {
    match error {
        CatalogError::Validation(errors) => {
            let details = errors
                .iter()
                .enumerate()
                .map(|(i, e)| format!("  {}. {}", i + 1, e))
                .collect::<Vec<_>>()
                .join("\n");
            (
                "Validation Error".to_string(),
                format!(
                    "The catalog file has {} validation error(s).",
                    errors.len()
                ),
                details,
            )
        }
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        CatalogError::Json(e) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", e, e.line(), e.column()),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            other.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use privcat_core::{FieldError, ValidationErrors};

    #[test]
    fn validation_errors_are_numbered() {
        let errors = ValidationErrors::from_vec(vec![
            FieldError::new("/patterns/0/id", "bad id"),
            FieldError::new("root", "missing meta"),
        ])
        .unwrap();

        let (title, message, details) =
            map_catalog_load_error(&CatalogError::Validation(errors), Path::new("c.json"));
        assert_eq!(title, "Validation Error");
        assert_eq!(message, "The catalog file has 2 validation error(s).");
        assert_eq!(details, "  1. /patterns/0/id: bad id\n  2. root: missing meta");
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let error = privcat_core::load_catalog_from_path("nowhere/c.json", &Default::default())
            .unwrap_err();

        let (title, _, details) = map_catalog_load_error(&error, Path::new("nowhere/c.json"));
        assert_eq!(title, "File Not Found");
        assert!(details.contains("nowhere/c.json"));
    }

    #[test]
    fn json_errors_carry_position() {
        let error = privcat_core::load_catalog_from_str("{\n  oops", &Default::default()).unwrap_err();

        let (title, _, details) = map_catalog_load_error(&error, Path::new("c.json"));
        assert_eq!(title, "Invalid JSON");
        assert!(details.contains("line 2"));
    }
}
