//! Request construction
//!
//! Everything needed to turn an [`Operation`] plus user input into a
//! concrete request: binding, default body synthesis and URL composition.

mod binder;
mod body;
mod compose;
mod method;
mod query;

use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;
use crate::operation::Operation;

pub use binder::{BoundParameters, ParameterInput, bind_parameters};
pub use body::{default_body_text, default_for_hint, synthesize_default};
pub use compose::{compose_url, substitute_path};
pub use method::HttpMethod;
pub use query::{QUERY_VALUE, encode_query, encode_query_value};

/// A request ready for execution, created fresh for every send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundRequest {
    /// Values bound to declared parameters.
    pub parameters: BoundParameters,
    /// Raw body text; parsed as JSON only for body-bearing methods.
    #[serde(default)]
    pub body_text: String,
    /// Optional bearer token supplied by the caller.
    #[serde(skip)]
    pub auth_token: Option<BearerToken>,
}

impl BoundRequest {
    /// Binds user input for the operation.
    #[must_use]
    pub fn bind(operation: &Operation, input: &ParameterInput, body_text: impl Into<String>) -> Self {
        Self {
            parameters: bind_parameters(operation, input),
            body_text: body_text.into(),
            auth_token: None,
        }
    }

    /// Attaches (or clears) the bearer token.
    #[must_use]
    pub fn with_auth_token(mut self, token: Option<BearerToken>) -> Self {
        self.auth_token = token;
        self
    }
}

/// The editable values of one operation view.
///
/// Selecting an operation seeds a draft with every declared parameter blank
/// and, when the operation has a body schema, the synthesized default body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Raw parameter values as typed.
    pub input: ParameterInput,
    /// Body editor contents.
    pub body_text: String,
}

impl RequestDraft {
    /// Creates the seeded draft for an operation.
    #[must_use]
    pub fn for_operation(operation: &Operation) -> Self {
        Self {
            input: ParameterInput::blank_for(operation),
            body_text: operation
                .body_schema
                .as_ref()
                .map(default_body_text)
                .unwrap_or_default(),
        }
    }

    /// Binds the draft into a request for the operation.
    #[must_use]
    pub fn bind(&self, operation: &Operation) -> BoundRequest {
        BoundRequest::bind(operation, &self.input, self.body_text.clone())
    }
}
