//! List responses.

use crate::error::{QueryError, QueryResult};
use crate::key::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of records plus the size of the full matching set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub data: Vec<Record>,
    pub total_count: u64,
}

impl LoadResult {
    /// Reads a list endpoint body.
    ///
    /// Accepts the paginated envelope `{"results": [...], "count": N}` and a
    /// bare array. Without a `count`, the total is the number of records
    /// returned. A `null` body, or an object without a `results` array, is an
    /// empty page whose total is `count` when present and 0 otherwise.
    pub fn from_response(body: Value) -> QueryResult<Self> {
        let (items, count) = match body {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => (items, None),
            Value::Object(mut envelope) => {
                let count = envelope.get("count").and_then(Value::as_u64);
                match envelope.remove("results") {
                    Some(Value::Array(items)) => (items, count),
                    _ => (Vec::new(), Some(count.unwrap_or(0))),
                }
            }
            other => {
                return Err(QueryError::InvalidResponse(format!(
                    "expected an array or an envelope, got {other}"
                )));
            }
        };

        let data = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(QueryError::InvalidResponse(format!(
                    "record {index} is not an object: {other}"
                ))),
            })
            .collect::<QueryResult<Vec<_>>>()?;

        let total_count = count.unwrap_or(data.len() as u64);
        Ok(Self { data, total_count })
    }
}
