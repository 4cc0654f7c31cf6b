//! Parameter binding
//!
//! Maps raw user input onto an operation's declared parameters. Binding
//! never fails and never coerces: a developer must be able to send
//! incomplete or malformed requests and observe how the API reacts.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::operation::{Operation, ParameterLocation};

/// Raw values typed by the user, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInput {
    /// Values entered for path parameters.
    #[serde(default)]
    pub path: HashMap<String, String>,
    /// Values entered for query parameters.
    #[serde(default)]
    pub query: HashMap<String, String>,
    /// Values entered for header parameters.
    #[serde(default)]
    pub header: HashMap<String, String>,
}

impl ParameterInput {
    /// Creates an empty input set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a path value.
    #[must_use]
    pub fn path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    /// Sets a query value.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets a header value.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.insert(name.into(), value.into());
        self
    }

    /// Sets a value for the given location. Body-located names are ignored.
    pub fn set(&mut self, location: ParameterLocation, name: impl Into<String>, value: impl Into<String>) {
        let target = match location {
            ParameterLocation::Path => &mut self.path,
            ParameterLocation::Query => &mut self.query,
            ParameterLocation::Header => &mut self.header,
            ParameterLocation::Body => return,
        };
        target.insert(name.into(), value.into());
    }

    /// Returns a blank input set for the operation: every declared path,
    /// query and header parameter mapped to an empty string.
    #[must_use]
    pub fn blank_for(operation: &Operation) -> Self {
        let mut input = Self::new();
        for parameter in &operation.parameters {
            input.set(parameter.location, parameter.name.clone(), String::new());
        }
        input
    }

    /// Returns the names that match no declared parameter at their
    /// location, path first, then query, then header, each sorted by name.
    /// [`bind_parameters`] drops these values.
    #[must_use]
    pub fn undeclared(&self, operation: &Operation) -> Vec<(ParameterLocation, &str)> {
        let mut found = Vec::new();
        for (location, values) in [
            (ParameterLocation::Path, &self.path),
            (ParameterLocation::Query, &self.query),
            (ParameterLocation::Header, &self.header),
        ] {
            let mut names: Vec<&str> = values
                .keys()
                .map(String::as_str)
                .filter(|name| !operation.parameters_in(location).any(|p| p.name == *name))
                .collect();
            names.sort_unstable();
            found.extend(names.into_iter().map(|name| (location, name)));
        }
        found
    }
}

/// Values bound to declared parameters, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundParameters {
    /// Path parameter name → value.
    pub path: IndexMap<String, String>,
    /// Query parameter name → value (empty means not provided).
    pub query: IndexMap<String, String>,
    /// Header parameter name → value (empty means not provided).
    pub header: IndexMap<String, String>,
}

/// Binds raw user input onto the operation's declared parameters.
///
/// Every declared path, query and header parameter gets an entry; unset
/// values default to the empty string. Input keys that name no declared
/// parameter are dropped. Body-located parameters are documentation only.
#[must_use]
pub fn bind_parameters(operation: &Operation, input: &ParameterInput) -> BoundParameters {
    let mut bound = BoundParameters::default();

    for parameter in &operation.parameters {
        let (source, target) = match parameter.location {
            ParameterLocation::Path => (&input.path, &mut bound.path),
            ParameterLocation::Query => (&input.query, &mut bound.query),
            ParameterLocation::Header => (&input.header, &mut bound.header),
            ParameterLocation::Body => continue,
        };
        let value = source.get(&parameter.name).cloned().unwrap_or_default();
        target.insert(parameter.name.clone(), value);
    }

    bound
}
