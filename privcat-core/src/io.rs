use crate::access::{load_catalog, CatalogAccess};
use crate::error::CatalogError;
use crate::options::LoadOptions;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a catalog from a JSON file
pub fn load_catalog_from_path<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<CatalogAccess, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read catalog document");
    load_catalog_from_str(&contents, options)
}

/// Load a catalog from JSON text
pub fn load_catalog_from_str(contents: &str, options: &LoadOptions) -> Result<CatalogAccess, CatalogError> {
    let document: Value = serde_json::from_str(contents)?;
    load_catalog(&document, options)
}

/// Load a catalog from any reader producing JSON
pub fn load_catalog_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<CatalogAccess, CatalogError> {
    let document: Value = serde_json::from_reader(reader)?;
    load_catalog(&document, options)
}

