//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not one the console can send.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A parameter location is not one of path, query, header or body.
    #[error("invalid parameter location: {0}")]
    InvalidParameterLocation(String),

    /// The path template references a placeholder with no path parameter.
    #[error("operation `{operation}`: placeholder `:{name}` has no matching path parameter")]
    UnboundPlaceholder {
        /// Operation identifier.
        operation: String,
        /// Placeholder name.
        name: String,
    },

    /// A path parameter is declared but never appears in the path template.
    #[error("operation `{operation}`: path parameter `{name}` does not appear in the path template")]
    OrphanPathParameter {
        /// Operation identifier.
        operation: String,
        /// Parameter name.
        name: String,
    },

    /// The same path parameter is declared twice.
    #[error("operation `{operation}`: path parameter `{name}` is declared more than once")]
    DuplicatePathParameter {
        /// Operation identifier.
        operation: String,
        /// Parameter name.
        name: String,
    },

    /// Two operations in one catalog share an identifier.
    #[error("duplicate operation id: {0}")]
    DuplicateOperationId(String),

    /// An operation identifier is empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
