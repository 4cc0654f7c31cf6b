//! API Console Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus file-backed loading of
//! catalogs and settings.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestHttpClient;
pub use persistence::{
    CatalogError, SettingsError, SettingsRepository, catalog_from_json, catalog_from_yaml,
    load_catalog,
};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
