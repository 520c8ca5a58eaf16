//! Filter expression trees.
//!
//! The grid component encodes a filter as nested JSON arrays, for example
//! `[["name", "contains", "ro"], "and", ["age", ">", 30]]`. The tree is parsed
//! once into a [`FilterNode`] and then folded into query parameters.

use crate::error::{QueryError, QueryResult};
use crate::params::QueryParams;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Comparison and text operators understood by the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
    Contains,
    StartsWith,
    EndsWith,
    /// Any operator without a Django lookup, e.g. `<>` or `notcontains`.
    Other(String),
}

impl FilterOperator {
    /// Reads an operator token as sent by the grid.
    pub fn parse(token: &str) -> Self {
        match token {
            "=" => Self::Equal,
            ">=" => Self::GreaterOrEqual,
            "<=" => Self::LessOrEqual,
            ">" => Self::Greater,
            "<" => Self::Less,
            "contains" => Self::Contains,
            "startswith" => Self::StartsWith,
            "endswith" => Self::EndsWith,
            other => Self::Other(other.to_string()),
        }
    }

    /// The grid token for this operator.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equal => "=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Contains => "contains",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
            Self::Other(token) => token,
        }
    }

    /// The Django field-lookup suffix for this operator.
    ///
    /// Unrecognized operators map to the empty suffix, i.e. plain equality.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Equal => "",
            Self::GreaterOrEqual => "__gte",
            Self::LessOrEqual => "__lte",
            Self::Greater => "__gt",
            Self::Less => "__lt",
            Self::Contains => "__icontains",
            Self::StartsWith => "__istartswith",
            Self::EndsWith => "__iendswith",
            Self::Other(_) => "",
        }
    }
}

impl From<&str> for FilterOperator {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed filter expression.
///
/// Connector tokens (`"and"`, `"or"`, `"!"`) are not represented: a group
/// only keeps its sub-trees.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    /// A single `[field, operator, value]` condition.
    Leaf {
        field: String,
        operator: FilterOperator,
        value: Value,
    },
    /// A list of sub-expressions.
    Group { children: Vec<FilterNode> },
}

impl FilterNode {
    /// Shorthand for a leaf condition.
    pub fn leaf(
        field: impl Into<String>,
        operator: impl Into<FilterOperator>,
        value: impl Into<Value>,
    ) -> Self {
        Self::Leaf {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a group of conditions.
    pub fn group(children: Vec<FilterNode>) -> Self {
        Self::Group { children }
    }

    /// Parses the grid's nested-array representation.
    ///
    /// Returns `Ok(None)` for connector tokens: any non-array value, and
    /// single-element arrays such as `["and"]`. An array with at least one
    /// array element is a group. Any other array is a leaf: either
    /// `[field, operator, value]` or the binary shorthand `[field, value]`,
    /// which means equality. A non-string operator has no lookup and also
    /// means equality.
    pub fn from_value(value: &Value) -> QueryResult<Option<Self>> {
        let Value::Array(items) = value else {
            return Ok(None);
        };

        if items.iter().any(Value::is_array) {
            let mut children = Vec::with_capacity(items.len());
            for item in items {
                if let Some(child) = Self::from_value(item)? {
                    children.push(child);
                }
            }
            return Ok(Some(Self::Group { children }));
        }

        match items.as_slice() {
            [] => Ok(Some(Self::Group { children: Vec::new() })),
            [token] => {
                warn!("Dropping bare filter token {}", token);
                Ok(None)
            }
            [field, value] => Ok(Some(Self::Leaf {
                field: leaf_field(field)?,
                operator: FilterOperator::Equal,
                value: value.clone(),
            })),
            [field, operator, value] => {
                let operator = match operator {
                    Value::String(token) => FilterOperator::parse(token),
                    other => FilterOperator::Other(other.to_string()),
                };
                Ok(Some(Self::Leaf {
                    field: leaf_field(field)?,
                    operator,
                    value: value.clone(),
                }))
            }
            _ => Err(QueryError::InvalidFilter(format!(
                "expected [field, operator, value], got {value}"
            ))),
        }
    }

    /// Sets one query parameter per leaf, depth-first and left to right.
    ///
    /// A later leaf with the same parameter name overwrites an earlier one.
    pub fn apply_to(&self, params: &mut QueryParams) {
        match self {
            Self::Leaf { field, operator, value } => {
                params.set(format!("{field}{}", operator.suffix()), render_value(value));
            }
            Self::Group { children } => {
                for child in children {
                    child.apply_to(params);
                }
            }
        }
    }

    /// Number of leaf conditions in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Group { children } => children.iter().map(Self::leaf_count).sum(),
        }
    }
}

impl TryFrom<Value> for FilterNode {
    type Error = QueryError;

    fn try_from(value: Value) -> QueryResult<Self> {
        Ok(Self::from_value(&value)?.unwrap_or(Self::Group { children: Vec::new() }))
    }
}

impl<'de> Deserialize<'de> for FilterNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

fn leaf_field(field: &Value) -> QueryResult<String> {
    field
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| QueryError::InvalidFilter(format!("field must be a string, got {field}")))
}

/// Renders a filter value the way it appears in a query string.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_value_forms() {
        assert_eq!(render_value(&json!("Rome")), "Rome");
        assert_eq!(render_value(&json!(30)), "30");
        assert_eq!(render_value(&json!(2.5)), "2.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&Value::Null), "null");
        assert_eq!(render_value(&json!([1, "b"])), "1,b");
    }

    #[test]
    fn bare_connector_is_skipped() {
        assert!(FilterNode::from_value(&json!("or")).unwrap().is_none());
        assert!(FilterNode::from_value(&json!(["and"])).unwrap().is_none());
    }
}
