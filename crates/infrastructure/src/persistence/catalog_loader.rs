//! Catalog loading from JSON or YAML files.
//!
//! A catalog file holds an ordered list of operations. The format is chosen
//! by file extension; loading validates every operation and id uniqueness.

use std::path::{Path, PathBuf};

use apiconsole_domain::{Catalog, DomainError, Operation};
use tokio::fs;
use tracing::info;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON could not be parsed into operations.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML could not be parsed into operations.
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not `.json`, `.yaml` or `.yml`.
    #[error("unsupported catalog format: {}", path.display())]
    UnsupportedFormat {
        /// Catalog path.
        path: PathBuf,
    },

    /// The operations violate a catalog invariant.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl CatalogFormat {
    /// Detects the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses and validates a JSON catalog.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or an invariant is violated.
pub fn catalog_from_json(content: &str) -> Result<Catalog, CatalogError> {
    let operations: Vec<Operation> = serde_json::from_str(content)?;
    Ok(Catalog::new(operations)?)
}

/// Parses and validates a YAML catalog.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or an invariant is violated.
pub fn catalog_from_yaml(content: &str) -> Result<Catalog, CatalogError> {
    let operations: Vec<Operation> = serde_yaml::from_str(content)?;
    Ok(Catalog::new(operations)?)
}

/// Loads a catalog file.
///
/// # Errors
///
/// Returns an error if the extension is unsupported, the file cannot be
/// read, or its contents are invalid.
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = match format {
        CatalogFormat::Json => catalog_from_json(&content)?,
        CatalogFormat::Yaml => catalog_from_yaml(&content)?,
    };

    info!(path = %path.display(), operations = catalog.len(), "catalog loaded");
    Ok(catalog)
}
