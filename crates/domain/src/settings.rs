//! Console Settings Domain Model
//!
//! Defines where requests are sent and where the catalog is read from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default upstream proxy prefix.
pub const DEFAULT_PROXY_BASE: &str = "http://localhost:3000/proxy";

/// Console configuration.
///
/// All requests go to `proxy_base`; the hosting environment rewrites that
/// prefix to the real upstream host, so the console never learns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Fixed prefix every composed URL starts with.
    pub proxy_base: String,
    /// Catalog file to load when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// User-Agent sent with every request.
    pub user_agent: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            catalog_path: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("apiconsole/{}", env!("CARGO_PKG_VERSION"))
}

impl ConsoleSettings {
    /// Replaces the proxy base.
    #[must_use]
    pub fn with_proxy_base(mut self, proxy_base: impl Into<String>) -> Self {
        self.proxy_base = proxy_base.into();
        self
    }

    /// Replaces the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Checks that the proxy base is an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] otherwise.
    pub fn validate(&self) -> DomainResult<()> {
        let parsed = Url::parse(&self.proxy_base)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.proxy_base)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DomainError::InvalidUrl(format!(
                "proxy base must use http or https, got `{other}`"
            ))),
        }
    }
}
