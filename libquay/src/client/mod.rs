//! HTTP request helper for the Quay API.
//!
//! This module provides a thin HTTP client built on reqwest. It resolves
//! request targets against the configured API base URL, attaches query
//! parameters and hands back the raw status and body. Interpreting the
//! status is left to the caller.

use crate::error::{QuayError, Result};
use crate::query::Query;
use reqwest::Client as ReqwestClient;
use std::future::Future;
use std::time::Duration;
use url::Url;

pub use reqwest::Method;


/// Default Quay API base URL.
pub const DEFAULT_QUAY_URL: &str = "https://quay.io/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True only for HTTP 200, the one status the tag endpoint answers with
    /// on success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues a single request against the registry.
///
/// `target` is either an absolute URL or a path relative to the API base
/// URL. Non-success statuses are returned, not raised; only transport
/// failures produce an error.
pub trait Transport {
    fn request(
        &self,
        method: Method,
        target: &str,
        query: &Query,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Registry endpoint configuration.
///
/// # Examples
///
/// ```
/// use libquay::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://quay.example.com/api/v1")
///     .with_timeout(30);
/// assert_eq!(config.timeout_seconds, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (default: https://quay.io/api/v1)
    pub base_url: String,
    /// Request timeout in seconds (default: 15)
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_QUAY_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// API base URL without trailing slash
    base_url: String,
    timeout_seconds: u64,
}

impl Client {
    /// Creates a client for the public quay.io API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an endpoint configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::client::{Client, ClientConfig};
    ///
    /// let client = Client::with_config(
    ///     ClientConfig::new().with_base_url("https://quay.example.com/api/v1/"),
    /// )
    /// .unwrap();
    /// assert_eq!(client.base_url(), "https://quay.example.com/api/v1");
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Self::normalize_url(&config.base_url)?;

        if config.timeout_seconds == 0 {
            return Err(QuayError::config(
                "Request timeout must be at least one second",
                None::<String>,
            ));
        }

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| QuayError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            base_url,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Validates a base URL and strips trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(QuayError::config("Quay URL cannot be empty", None::<String>));
        }

        Url::parse(url).map_err(|e| {
            QuayError::config_with_source(format!("Invalid Quay URL '{}'", url), None::<String>, e)
        })?;

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a request target to an absolute URL.
    ///
    /// Targets starting with `http` are taken as-is.
    pub fn resolve(&self, target: &str) -> String {
        if target.starts_with("http") {
            target.to_string()
        } else {
            format!("{}/{}", self.base_url, target.trim_start_matches('/'))
        }
    }

    /// Translates a reqwest error into a QuayError.
    fn translate_reqwest_error(&self, error: reqwest::Error, url: &str) -> QuayError {
        if error.is_timeout() {
            QuayError::network_with_source(
                format!(
                    "Request to {} timed out after {} seconds",
                    url, self.timeout_seconds
                ),
                error,
            )
        } else if error.is_connect() {
            QuayError::network_with_source(format!("Failed to connect to {}", url), error)
        } else {
            QuayError::network_with_source(
                format!("Network error communicating with {}", url),
                error,
            )
        }
    }
}

impl Transport for Client {
    async fn request(&self, method: Method, target: &str, query: &Query) -> Result<RawResponse> {
        let url = self.resolve(target);
        let params = query.encoded_pairs();
        tracing::debug!(%method, %url, ?params, "sending request");

        let response = self
            .http_client
            .request(method, &url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.translate_reqwest_error(e, &url))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            QuayError::network_with_source(format!("Failed to read response from {}", url), e)
        })?;
        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
