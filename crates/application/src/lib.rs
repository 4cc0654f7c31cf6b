//! API Console Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The execution use case, which never lets a failure escape
//! - A session that tracks selection, draft and the last response
//! - Application-level error handling

pub mod error;
pub mod execute_operation;
pub mod ports;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use execute_operation::ExecuteOperation;
pub use ports::{HttpClient, HttpClientError, OutboundRequest, TransportResponse};
pub use session::ConsoleSession;
