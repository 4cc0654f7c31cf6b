//! Execution state types for presentation binding.
//!
//! Callers are expected to disable re-invocation while a request is in
//! flight; the state machine exposes [`ExecutionState::is_loading`] for that.

use serde::{Deserialize, Serialize};

use crate::response::Response;

/// Represents the current state of an operation view.
///
/// - `Idle`: nothing sent yet, or the view was reset
/// - `Loading`: request in flight, re-invocation should be disabled
/// - `Completed`: the most recently completed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExecutionState {
    /// No request has been sent yet.
    #[default]
    Idle,

    /// Request is in progress.
    Loading,

    /// A response (possibly a network error) is available.
    Completed {
        /// The response record.
        response: Box<Response>,
    },
}

impl ExecutionState {
    /// Creates a Completed state from a response.
    #[must_use]
    pub fn completed(response: Response) -> Self {
        Self::Completed {
            response: Box::new(response),
        }
    }

    /// Returns true if the state is Idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a request is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the response if one has completed.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Completed { response } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_idle() {
        let state = ExecutionState::default();
        assert!(state.is_idle());
        assert!(state.response().is_none());
    }

    #[test]
    fn test_loading_has_no_response() {
        let state = ExecutionState::Loading;
        assert!(state.is_loading());
        assert!(state.response().is_none());
    }

    #[test]
    fn test_loading_serializes_as_bare_tag() {
        let json = serde_json::to_value(ExecutionState::Loading).unwrap();
        assert_eq!(json, serde_json::json!({"state": "loading"}));
        let back: ExecutionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, ExecutionState::Loading);
    }

    #[test]
    fn test_completed_exposes_response() {
        let state = ExecutionState::completed(Response::network_error("boom", None));
        assert!(!state.is_loading());
        assert_eq!(state.response().map(|r| r.status), Some(0));
    }
}
