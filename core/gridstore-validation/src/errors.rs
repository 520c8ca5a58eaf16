//! Field-level validation errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name.
///
/// Serializes as `{"email": ["Enter a valid email address."]}`, the body a
/// Django REST Framework backend returns with a 400. Errors that are not tied
/// to one field use the `non_field_errors` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub const NON_FIELD: &'static str = "non_field_errors";

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Reads a backend error body.
    ///
    /// Each value may be a list of messages or a single message. Nested
    /// serializer errors are flattened with dotted keys (`address.city`).
    /// Returns `None` if the body is not an object or carries no messages.
    pub fn from_response(body: &Value) -> Option<Self> {
        let Value::Object(map) = body else {
            return None;
        };

        let mut errors = Self::new();
        for (field, value) in map {
            errors.collect(field, value);
        }

        (!errors.is_empty()).then_some(errors)
    }

    fn collect(&mut self, field: &str, value: &Value) {
        match value {
            Value::String(message) => self.add(field, message.as_str()),
            Value::Array(items) => {
                for item in items {
                    self.collect(field, item);
                }
            }
            Value::Object(nested) => {
                for (key, inner) in nested {
                    self.collect(&format!("{field}.{key}"), inner);
                }
            }
            Value::Null => {}
            other => self.add(field, other.to_string()),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
