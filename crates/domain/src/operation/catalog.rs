//! Ordered, immutable operation catalog

use std::collections::HashSet;

use serde::Serialize;

use super::Operation;
use crate::error::{DomainError, DomainResult};

/// An immutable, ordered collection of validated operations.
///
/// Construction checks that ids are unique and that every operation honors
/// the placeholder invariant, so lookups never need to re-validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    operations: Vec<Operation>,
}

impl Catalog {
    /// Builds a catalog from operations in their supplied order.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or an invalid operation.
    pub fn new(operations: Vec<Operation>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for operation in &operations {
            operation.validate()?;
            if !seen.insert(operation.id.as_str()) {
                return Err(DomainError::DuplicateOperationId(operation.id.clone()));
            }
        }
        Ok(Self { operations })
    }

    /// Looks up an operation by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.id == id)
    }

    /// Returns the first operation, the default selection of a fresh view.
    #[must_use]
    pub fn first(&self) -> Option<&Operation> {
        self.operations.first()
    }

    /// Returns an iterator over operations in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Returns the number of operations.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if the catalog holds no operations.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
