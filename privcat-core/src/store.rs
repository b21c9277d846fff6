use crate::access::{load_catalog, CatalogAccess};
use crate::error::CatalogError;
use crate::io::load_catalog_from_path;
use crate::options::LoadOptions;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide handle to the live catalog
///
/// Readers take an `Arc` snapshot and never see a catalog change underneath
/// them. A reload builds a complete new catalog first and swaps it in only
/// when loading succeeded.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<CatalogAccess>>,
}

impl SharedCatalog {
    pub fn new(access: CatalogAccess) -> Self {
        Self {
            current: RwLock::new(Arc::new(access)),
        }
    }

    /// Snapshot of the live catalog
    pub fn current(&self) -> Arc<CatalogAccess> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a whole catalog
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new catalog, returning the one it replaced
    pub fn replace(&self, access: CatalogAccess) -> Arc<CatalogAccess> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(access))
    }

    pub fn reload(&self, document: &Value, options: &LoadOptions) -> Result<Arc<CatalogAccess>, CatalogError> {
        let access = load_catalog(document, options)?;
        self.replace(access);
        Ok(self.current())
    }

    pub fn reload_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &LoadOptions,
    ) -> Result<Arc<CatalogAccess>, CatalogError> {
        let access = load_catalog_from_path(path, options)?;
        self.replace(access);
        Ok(self.current())
    }
}
