//! Django REST Framework collection store.
//!
//! Talks to a `ModelViewSet`-style endpoint with `LimitOffsetPagination`,
//! `SearchFilter` (`_search`), `OrderingFilter` (`ordering`) and
//! `django-filter` field lookups.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::RemoteStore;
use async_trait::async_trait;
use gridstore_query::{LoadOptions, LoadResult, Record, RecordKey};
use gridstore_validation::FieldErrors;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Remote store backed by one REST collection endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RestStore {
    config: StoreConfig,
    base_url: String,
    client: Client,
}

/// How a failed response maps onto [`StoreError`].
#[derive(Clone, Copy)]
struct Expect<'a> {
    /// Key the request addressed; a 404 becomes [`StoreError::NotFound`].
    key: Option<&'a RecordKey>,
    /// Whether a 4xx body may carry field errors.
    field_errors: bool,
}

impl<'a> Expect<'a> {
    fn read(key: Option<&'a RecordKey>) -> Self {
        Self {
            key,
            field_errors: false,
        }
    }

    fn write(key: Option<&'a RecordKey>) -> Self {
        Self {
            key,
            field_errors: true,
        }
    }
}

impl RestStore {
    /// Creates a store for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> StoreResult<Self> {
        Self::with_config(StoreConfig::new(base_url))
    }

    /// Creates a store with its own HTTP client built from `config`.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(config, client))
    }

    /// Creates a store that shares an existing HTTP client.
    ///
    /// The client's own timeout applies instead of `config.timeout_secs`.
    pub fn with_client(config: StoreConfig, client: Client) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            config,
            base_url,
            client,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// `{base}/`
    pub fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// `{base}/{key}/`
    pub fn record_url(&self, key: &RecordKey) -> String {
        format!("{}/{}/", self.base_url, key.to_path_segment())
    }

    /// Loads a page from a raw grid request such as
    /// `{"take": 20, "skip": 0, "filter": [...]}`.
    pub async fn load_json(&self, request: &Value) -> StoreResult<LoadResult> {
        let options = LoadOptions::deserialize(request)
            .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;
        self.load(&options).await
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> StoreResult<Response> {
        request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Transport(format!("{what} timed out: {e}"))
                } else {
                    StoreError::Transport(format!("{what} failed: {e}"))
                }
            })
    }

    /// Passes successful responses through and classifies failures.
    async fn check(response: Response, expect: Expect<'_>) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND
            && let Some(key) = expect.key
        {
            return Err(StoreError::NotFound(key.to_string()));
        }

        if expect.field_errors && status.is_client_error() {
            let errors = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(FieldErrors::from_response);
            if let Some(errors) = errors {
                return Err(StoreError::Validation(errors));
            }
        }

        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Reads a JSON body. An empty body reads as `null`.
    async fn read_json(response: Response, what: &str) -> StoreResult<Value> {
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(format!("failed to read {what} response: {e}")))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| StoreError::Transport(format!("failed to parse {what} response: {e}")))
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    fn key_field(&self) -> &str {
        &self.config.key_field
    }

    async fn load(&self, options: &LoadOptions) -> StoreResult<LoadResult> {
        let params = options.to_query_params();
        let url = self.collection_url();
        debug!("GET {}?{}", url, params.to_query_string());

        let response = self
            .send(self.client.get(&url).query(params.as_pairs()), "load")
            .await?;
        let response = Self::check(response, Expect::read(None)).await?;
        let body = Self::read_json(response, "load").await?;

        let result = LoadResult::from_response(body)
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        debug!("Loaded {} of {} records", result.data.len(), result.total_count);
        Ok(result)
    }

    async fn by_key(&self, key: &RecordKey) -> StoreResult<Record> {
        let url = self.record_url(key);
        debug!("GET {}", url);

        let response = self.send(self.client.get(&url), "get").await?;
        let response = Self::check(response, Expect::read(Some(key))).await?;

        match Self::read_json(response, "get").await? {
            Value::Object(record) => Ok(record),
            other => Err(StoreError::Transport(format!(
                "expected a record object for {key}, got {other}"
            ))),
        }
    }

    async fn insert(&self, values: &Record) -> StoreResult<()> {
        let url = self.collection_url();
        debug!("POST {}", url);

        let response = self
            .send(self.client.post(&url).json(values), "insert")
            .await?;
        Self::check(response, Expect::write(None)).await?;

        info!("Inserted record into {}", url);
        Ok(())
    }

    async fn update(&self, key: &RecordKey, values: &Record) -> StoreResult<()> {
        let url = self.record_url(key);
        debug!("PATCH {}", url);

        let response = self
            .send(self.client.patch(&url).json(values), "update")
            .await?;
        Self::check(response, Expect::write(Some(key))).await?;

        info!("Updated record {}", key);
        Ok(())
    }

    async fn remove(&self, key: &RecordKey) -> StoreResult<()> {
        let url = self.record_url(key);
        debug!("DELETE {}", url);

        let response = self.send(self.client.delete(&url), "remove").await?;
        Self::check(response, Expect::read(Some(key))).await?;

        info!("Removed record {}", key);
        Ok(())
    }
}
