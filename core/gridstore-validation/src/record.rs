//! Record-level validation.

use crate::errors::FieldErrors;
use crate::patterns::{is_valid_email, is_valid_phone, is_valid_vat};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which pattern a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    Phone,
    Email,
    Vat,
}

impl FieldRule {
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Phone => is_valid_phone(value),
            Self::Email => is_valid_email(value),
            Self::Vat => is_valid_vat(value),
        }
    }

    /// Message reported when [`check`](Self::check) fails.
    pub fn message(self) -> &'static str {
        match self {
            Self::Phone => "Enter a valid phone number.",
            Self::Email => "Enter a valid email address.",
            Self::Vat => "Enter a valid VAT number.",
        }
    }
}

/// Checks named fields of a record against [`FieldRule`]s.
///
/// Absent, `null` and empty-string values are not checked, so the same
/// validator works for full inserts and partial updates.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    rules: Vec<(String, FieldRule)>,
}

impl RecordValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for contact and register records: `phone`, `mobile`, `email`
    /// and `vat_number`.
    pub fn contact() -> Self {
        Self::new()
            .rule("phone", FieldRule::Phone)
            .rule("mobile", FieldRule::Phone)
            .rule("email", FieldRule::Email)
            .rule("vat_number", FieldRule::Vat)
    }

    /// Adds a rule. A field may carry several rules.
    pub fn rule(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.push((field.into(), rule));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, FieldRule)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), *rule))
    }

    pub fn validate(&self, record: &Map<String, Value>) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, rule) in &self.rules {
            match record.get(field) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) if s.is_empty() => {}
                Some(Value::String(s)) => {
                    if !rule.check(s) {
                        errors.add(field.as_str(), rule.message());
                    }
                }
                Some(_) => errors.add(field.as_str(), "Not a valid string."),
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
