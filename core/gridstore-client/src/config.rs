//! Store configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Collection URL, e.g. `http://localhost:8000/api/contacts`.
    /// A trailing slash is ignored.
    pub base_url: String,
    /// Record attribute holding the primary key.
    pub key_field: String,
    /// Deadline applied to every request.
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub const DEFAULT_KEY_FIELD: &'static str = "id";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            key_field: Self::DEFAULT_KEY_FIELD.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}
