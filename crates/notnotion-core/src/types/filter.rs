//! Equality filters for document store queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value compared against a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// A boolean value.
    Boolean(bool),
    /// An integer value.
    Integer(i64),
}

impl FilterValue {
    /// Returns `true` if the JSON value equals this filter value.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String(expected), Value::String(actual)) => expected == actual,
            (Self::Boolean(expected), Value::Bool(actual)) => expected == actual,
            (Self::Integer(expected), Value::Number(actual)) => actual.as_i64() == Some(*expected),
            _ => false,
        }
    }
}

/// A single equality condition on a top-level document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// The document field name (wire name, e.g. `parentFolderId`).
    pub field: String,
    /// The value the field must equal.
    pub value: FilterValue,
}

impl FieldFilter {
    /// Shorthand for a string equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: FilterValue::String(value.into()),
        }
    }

    /// Shorthand for a boolean equality filter.
    pub fn eq_bool(field: impl Into<String>, value: bool) -> Self {
        Self {
            field: field.into(),
            value: FilterValue::Boolean(value),
        }
    }

    /// Returns `true` if the document data satisfies this filter.
    ///
    /// A missing field never matches.
    pub fn matches(&self, data: &Value) -> bool {
        data.get(&self.field)
            .is_some_and(|actual| self.value.matches(actual))
    }
}
