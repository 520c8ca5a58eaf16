//! Request and response shapes for grid-backed REST collections.
//!
//! This crate is the pure half of the adapter. It knows how to:
//! - parse the grid component's load request (paging, search, sort, filter)
//! - flatten a filter expression tree into Django field-lookup parameters
//!   (`age__gte=30`, `name__icontains=ro`)
//! - read a list response, either a `{results, count}` envelope or a bare array
//!
//! Nothing here performs I/O. The HTTP side lives in `gridstore-client`.
//!
//! # Known limitation
//!
//! Logical connectors inside a filter (`"and"`, `"or"`, `"!"`) are dropped.
//! Every leaf condition becomes one query parameter, so an OR-group is sent to
//! the backend as if it were an AND-group.

mod error;
mod filter;
mod key;
mod load;
mod params;
mod result;

pub use error::{QueryError, QueryResult};
pub use filter::{FilterNode, FilterOperator};
pub use key::{Record, RecordKey};
pub use load::{LoadOptions, SortSpec};
pub use params::QueryParams;
pub use result::LoadResult;
