//! Remote collection abstraction.
//!
//! Mirrors the capability set a data grid expects from a remote data source.

use crate::error::StoreResult;
use async_trait::async_trait;
use gridstore_query::{LoadOptions, LoadResult, Record, RecordKey};

/// A remote collection of keyed records.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Name of the record attribute holding the primary key.
    fn key_field(&self) -> &str;

    /// Returns the key of `record`, if it carries one.
    fn key_of(&self, record: &Record) -> Option<RecordKey> {
        record.get(self.key_field()).and_then(RecordKey::from_value)
    }

    /// Loads one page of records plus the total size of the matching set.
    async fn load(&self, options: &LoadOptions) -> StoreResult<LoadResult>;

    /// Fetches a single record.
    async fn by_key(&self, key: &RecordKey) -> StoreResult<Record>;

    /// Creates a record.
    async fn insert(&self, values: &Record) -> StoreResult<()>;

    /// Partially updates a record.
    async fn update(&self, key: &RecordKey, values: &Record) -> StoreResult<()>;

    /// Deletes a record.
    async fn remove(&self, key: &RecordKey) -> StoreResult<()>;
}
