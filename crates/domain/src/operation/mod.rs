//! Operation descriptors
//!
//! An [`Operation`] is one documented API action supplied by the catalog:
//! a method, a `:name` path template, an ordered parameter list and an
//! optional loosely-typed body schema.

mod catalog;
mod placeholder;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::request::HttpMethod;

pub use catalog::Catalog;
pub use placeholder::{Placeholder, parse_placeholders};

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a request header.
    Header,
    /// Documented body field (the body itself travels as raw text).
    Body,
}

impl ParameterLocation {
    /// Returns the location as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "query" => Ok(Self::Query),
            "header" => Ok(Self::Header),
            "body" => Ok(Self::Body),
            other => Err(DomainError::InvalidParameterLocation(other.to_string())),
        }
    }
}

/// A declared operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the parameter travels.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Free-form declared type (e.g. "`MongoId`", "String").
    #[serde(rename = "type", default)]
    pub declared_type: String,
    /// Whether the API documents the parameter as required.
    #[serde(default)]
    pub required: bool,
    /// Optional documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Parameter {
    /// Creates an optional parameter of type `String`.
    #[must_use]
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            declared_type: "String".to_string(),
            required: false,
            description: None,
            example: None,
        }
    }

    /// Creates a required path parameter.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Path).required()
    }

    /// Creates an optional query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Query)
    }

    /// Creates an optional header parameter.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Header)
    }

    /// Marks the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = declared_type.into();
        self
    }

    /// Adds a description to this parameter.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One documented API action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier, stable across the process lifetime.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template with `:name` placeholders.
    #[serde(rename = "path", alias = "pathTemplate")]
    pub path_template: String,
    /// Grouping label used by catalog browsers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    /// Optional documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered parameter declarations.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Field name to type-hint mapping for operations that carry a body.
    #[serde(
        rename = "requestBody",
        alias = "bodySchema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_schema: Option<Map<String, Value>>,
    /// Documented response shape, kept verbatim.
    #[serde(
        rename = "responseSchema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub response_schema: Option<Value>,
}

impl Operation {
    /// Creates an operation with no parameters and no body schema.
    #[must_use]
    pub fn new(id: impl Into<String>, method: HttpMethod, path_template: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            method,
            path_template: path_template.into(),
            category: String::new(),
            description: None,
            parameters: Vec::new(),
            body_schema: None,
            response_schema: None,
        }
    }

    /// Appends a parameter declaration.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the body schema.
    #[must_use]
    pub fn with_body_schema(mut self, schema: Map<String, Value>) -> Self {
        self.body_schema = Some(schema);
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the declared parameters at the given location, in order.
    pub fn parameters_in(
        &self,
        location: ParameterLocation,
    ) -> impl Iterator<Item = &Parameter> + '_ {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }

    /// Returns the placeholders of the path template, in order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        parse_placeholders(&self.path_template)
    }

    /// Returns true if the operation documents a request body.
    #[must_use]
    pub const fn has_body_schema(&self) -> bool {
        self.body_schema.is_some()
    }

    /// Checks the placeholder invariant: every placeholder has exactly one
    /// path parameter and every path parameter appears in the template.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(format!(
                "operation for `{} {}` has an empty id",
                self.method, self.path_template
            )));
        }

        let mut declared = HashSet::new();
        for parameter in self.parameters_in(ParameterLocation::Path) {
            if !declared.insert(parameter.name.as_str()) {
                return Err(DomainError::DuplicatePathParameter {
                    operation: self.id.clone(),
                    name: parameter.name.clone(),
                });
            }
        }

        let placeholders = self.placeholders();
        let used: HashSet<&str> = placeholders.iter().map(|p| p.name.as_str()).collect();

        if let Some(unbound) = placeholders
            .iter()
            .find(|p| !declared.contains(p.name.as_str()))
        {
            return Err(DomainError::UnboundPlaceholder {
                operation: self.id.clone(),
                name: unbound.name.clone(),
            });
        }

        if let Some(orphan) = self
            .parameters_in(ParameterLocation::Path)
            .find(|p| !used.contains(p.name.as_str()))
        {
            return Err(DomainError::OrphanPathParameter {
                operation: self.id.clone(),
                name: orphan.name.clone(),
            });
        }

        Ok(())
    }
}
