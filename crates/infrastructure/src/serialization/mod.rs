//! Stable JSON serialization for settings files and CLI output.
//!
//! - 2-space indentation
//! - Key order follows the source type (insertion order for `Value` maps)
//! - Trailing newline

mod json;

pub use json::*;
