//! Application error types

use apiconsole_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
///
/// None of these describe a failed execution: executions always produce a
/// [`Response`](apiconsole_domain::Response). These cover selection and
/// setup mistakes around it.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The requested operation id is not in the catalog.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Execution was requested before any operation was selected.
    #[error("no operation selected")]
    NoOperationSelected,

    /// Settings or inputs could not be turned into a working setup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
