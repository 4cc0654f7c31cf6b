//! File-backed catalog and settings loading.

mod catalog_loader;
mod settings_repository;

pub use catalog_loader::{
    CatalogError, CatalogFormat, catalog_from_json, catalog_from_yaml, load_catalog,
};
pub use settings_repository::{
    ENV_CATALOG, ENV_PROXY_BASE, SettingsError, SettingsRepository, apply_env_overrides,
};
