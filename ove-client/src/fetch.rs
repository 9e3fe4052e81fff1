use reqwest::{Client, Method};
use serde_json::Value;

use ove_types::ValidationError;

/// Request overrides for [`SafeClient::safe_fetch_with`]. The default is a
/// bare GET with no credentials and no body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Best-effort typed fetch.
///
/// Wraps an HTTP transport that may be absent: a client constructed with
/// [`SafeClient::detached`] models code running outside a browsing context
/// and refuses every fetch up front. All other failure modes (transport
/// errors, non-JSON bodies, schema mismatches) collapse into `None`; callers
/// treat that uniformly as "no data available".
#[derive(Debug, Clone)]
pub struct SafeClient {
    inner: Option<Client>,
}

impl SafeClient {
    /// Client with a live transport.
    pub fn new() -> Self {
        Self {
            inner: Some(Client::new()),
        }
    }

    /// Client for an environment without network capability. Every fetch
    /// returns `None` without touching the network.
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn has_context(&self) -> bool {
        self.inner.is_some()
    }

    /// GETs `url` and validates the JSON response against `schema`.
    pub async fn safe_fetch<T, S>(&self, url: &str, schema: S) -> Option<T>
    where
        S: Fn(&Value) -> Result<T, ValidationError>,
    {
        self.safe_fetch_with(url, RequestOptions::default(), schema)
            .await
    }

    /// Issues the request described by `options` and validates the JSON
    /// response against `schema`. Returns the validated value, or `None` on
    /// any failure; the caller cannot distinguish the failure modes.
    pub async fn safe_fetch_with<T, S>(
        &self,
        url: &str,
        options: RequestOptions,
        schema: S,
    ) -> Option<T>
    where
        S: Fn(&Value) -> Result<T, ValidationError>,
    {
        let Some(client) = &self.inner else {
            tracing::error!("attempting to fetch from a detached client context");
            return None;
        };

        let raw = match Self::request(client, url, options).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(url, "fetch failed: {e}");
                return None;
            }
        };

        match schema(&raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(url, "response failed validation: {e}");
                None
            }
        }
    }

    async fn request(
        client: &Client,
        url: &str,
        options: RequestOptions,
    ) -> Result<Value, reqwest::Error> {
        let mut builder = client.request(options.method, url);

        if let Some(token) = &options.bearer {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        builder.send().await?.json().await
    }
}

impl Default for SafeClient {
    fn default() -> Self {
        Self::new()
    }
}
