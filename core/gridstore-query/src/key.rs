//! Records and their primary keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A backend record: field name to JSON value.
pub type Record = Map<String, Value>;

/// Primary key of a record.
///
/// Most collections use integer ids; some (countries) are keyed by a string
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(i64),
    Str(String),
}

impl RecordKey {
    /// Reads a key from a JSON value. Only integers and strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// Percent-encoded form for use as a single URL path segment.
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Int(id) => id.to_string(),
            Self::Str(code) => urlencoding::encode(code).into_owned(),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordKey {
    fn from(code: &str) -> Self {
        Self::Str(code.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(code: String) -> Self {
        Self::Str(code)
    }
}

impl From<RecordKey> for Value {
    fn from(key: RecordKey) -> Self {
        match key {
            RecordKey::Int(id) => Value::from(id),
            RecordKey::Str(code) => Value::String(code),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(code) => f.write_str(code),
        }
    }
}

impl FromStr for RecordKey {
    type Err = Infallible;

    /// Integers parse as [`RecordKey::Int`], anything else is a string key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(|_| Self::Str(s.to_string()), Self::Int))
    }
}
