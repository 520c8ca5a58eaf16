//! Remote list store for grid components.
//!
//! [`RestStore`] lets a data grid load, filter, sort, page and edit records
//! held by a Django REST Framework collection endpoint:
//!
//! | operation | request |
//! |---|---|
//! | `load` | `GET {base}/?limit=&offset=&_search=&ordering=&<field><lookup>=` |
//! | `by_key` | `GET {base}/{key}/` |
//! | `insert` | `POST {base}/` |
//! | `update` | `PATCH {base}/{key}/` |
//! | `remove` | `DELETE {base}/{key}/` |
//!
//! Every operation is a single HTTP call with a fixed deadline. Nothing is
//! cached, batched or retried; errors go straight back to the caller.
//!
//! ```no_run
//! use gridstore_client::{RemoteStore, RestStore};
//! use gridstore_query::{LoadOptions, SortSpec};
//!
//! # async fn run() -> gridstore_client::StoreResult<()> {
//! let store = RestStore::new("http://localhost:8000/api/contacts")?;
//! let page = store
//!     .load(&LoadOptions::new().with_page(20, 0).with_sort(vec![SortSpec::asc("name")]))
//!     .await?;
//! println!("{} of {}", page.data.len(), page.total_count);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod rest;
mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use rest::RestStore;
pub use store::RemoteStore;

pub use gridstore_query::{LoadOptions, LoadResult, Record, RecordKey};
pub use gridstore_validation::FieldErrors;
