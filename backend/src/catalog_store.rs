use shared::{Catalog, CatalogError, CatalogRepository, EmbeddedCatalog};
use std::path::{Path, PathBuf};

/// Catalog read from a YAML file on disk, so the served content can be
/// edited without rebuilding the frontend.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for FileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let source = std::fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Catalog::from_yaml_str(&source)
    }
}

/// Loads from `primary`, falling back to the catalog compiled into
/// `shared` when the file is missing or invalid.
pub fn load_or_embedded(primary: &dyn CatalogRepository) -> Result<Catalog, CatalogError> {
    match primary.load() {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            log::warn!("Falling back to embedded catalog: {}", e);
            EmbeddedCatalog.load()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_catalog() -> FileCatalog {
        FileCatalog::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../config/catalog.yaml"))
    }

    #[test]
    fn workspace_file_matches_embedded_copy() {
        let from_disk = workspace_catalog().load().unwrap();
        let embedded = EmbeddedCatalog.load().unwrap();
        assert_eq!(from_disk, embedded);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let store = FileCatalog::new("/nonexistent/catalog.yaml");
        let err = store.load().unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
        assert!(err.to_string().contains("/nonexistent/catalog.yaml"));
    }

    #[test]
    fn missing_file_falls_back_to_embedded() {
        let store = FileCatalog::new("/nonexistent/catalog.yaml");
        let catalog = load_or_embedded(&store).unwrap();
        assert_eq!(catalog, EmbeddedCatalog.load().unwrap());
    }
}
