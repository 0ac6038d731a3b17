use serde::Serialize;

use super::config::DartConfig;
use super::error::{DartError, Result};

/// HTTP client for the DART open API.
///
/// `Dart` owns a pooled `reqwest::Client` and the service credential. It is cheap to
/// clone and holds no mutable state, so one instance can be shared across every request
/// a server handles.
///
/// A non-success HTTP status is not an error here. It means there is nothing to
/// analyze and surfaces as `Ok(None)`. Transport failures are still errors. There is no
/// retry and no rate limiting; every call is a single request bounded by the configured
/// timeout.
///
/// # Examples
///
/// ```rust
/// # use dartkit::Dart;
/// let dart = Dart::new("0123456789abcdef")?;
/// # Ok::<(), dartkit::DartError>(())
/// ```
///
/// With custom configuration:
///
/// ```rust
/// # use dartkit::{Dart, DartConfig};
/// # use std::time::Duration;
/// let config = DartConfig::new("0123456789abcdef").with_timeout(Duration::from_secs(5));
/// let dart = Dart::with_config(config)?;
/// # Ok::<(), dartkit::DartError>(())
/// ```
#[derive(Clone)]
pub struct Dart {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Service credential (`crtfc_key`)
    pub(crate) api_key: String,

    /// Base URL of the open API
    pub(crate) base_url: String,
}

impl std::fmt::Debug for Dart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dart")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct Credential<'a> {
    crtfc_key: &'a str,
}

impl Dart {
    /// Creates a client with the default timeout (30 seconds) and base URL.
    ///
    /// # Errors
    ///
    /// Returns `DartError::ConfigError` if the key is empty or the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(DartConfig::new(api_key))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// Use this to change the outbound timeout or to point the client at a mirror or a
    /// local test server.
    ///
    /// # Errors
    ///
    /// Returns `DartError::ConfigError` if the credential is empty or the HTTP client
    /// cannot be built.
    pub fn with_config(config: DartConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(DartError::ConfigError(
                "API key must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DartError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Dart {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the full URL for an API resource, credential first, then `params`.
    pub(crate) fn url<P: Serialize>(&self, resource: &str, params: &P) -> Result<String> {
        let credential = serde_urlencoded::to_string(Credential {
            crtfc_key: &self.api_key,
        })?;
        let query = serde_urlencoded::to_string(params)?;

        Ok(format!(
            "{}/{}?{}&{}",
            self.base_url, resource, credential, query
        ))
    }

    /// Fetches text content from a URL.
    ///
    /// Returns `Ok(Some(body))` on a success status and `Ok(None)` on any other status.
    /// The status and a short preview of the body are logged, without the URL, which
    /// carries the credential.
    ///
    /// # Errors
    ///
    /// * `DartError::RequestError` - network failure, timeout, or an unreadable body
    pub async fn get(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DartError::RequestError(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| DartError::RequestError(e.without_url()))?;
            return Ok(Some(body));
        }

        let preview = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        tracing::warn!(
            "Unexpected status code from DART: {}. Response preview: {}",
            status,
            preview.chars().take(200).collect::<String>()
        );
        Ok(None)
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
