//! API Console Domain - Core request engine types
//!
//! This crate defines the operation model and the pure parts of the request
//! engine: parameter binding, default body synthesis, URL composition and
//! response classification. All types here are pure Rust with no I/O.

pub mod auth;
pub mod error;
pub mod operation;
pub mod request;
pub mod response;
pub mod settings;
pub mod state;

pub use auth::BearerToken;
pub use error::{DomainError, DomainResult};
pub use operation::{Catalog, Operation, Parameter, ParameterLocation};
pub use request::{BoundParameters, BoundRequest, HttpMethod, ParameterInput, RequestDraft};
pub use response::{Response, StatusCategory, StatusCode, format_size};
pub use settings::{ConsoleSettings, DEFAULT_PROXY_BASE};
pub use state::ExecutionState;
