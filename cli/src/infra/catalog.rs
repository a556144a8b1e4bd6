//! Load the plugin catalog from disk.

use std::path::Path;

use crate::domain::{Catalog, CatalogError};

/// # Errors
///
/// Returns [`CatalogError::Unreadable`] if the file cannot be read and the
/// parse errors of [`Catalog::parse`] otherwise.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let origin = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Unreadable {
        path: origin.clone(),
        reason: e.to_string(),
    })?;
    let catalog = Catalog::parse(&json, &origin)?;
    tracing::debug!(path = %origin, apps = catalog.len(), "catalog loaded");
    Ok(catalog)
}
