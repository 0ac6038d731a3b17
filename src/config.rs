use std::time::Duration;

use super::error::{DartError, Result};

/// Default base URL of the DART open API.
pub const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Dart client
#[derive(Clone)]
pub struct DartConfig {
    /// Service credential sent as `crtfc_key` with every request
    pub api_key: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URL of the DART open API, without a trailing slash
    pub base_url: String,
}

impl std::fmt::Debug for DartConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DartConfig")
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DartConfig {
    /// Creates a configuration with the default timeout and base URL.
    ///
    /// ```rust
    /// use dartkit::DartConfig;
    /// let config = DartConfig::new("0123456789abcdef");
    /// assert_eq!(config.base_url, "https://opendart.fss.or.kr/api");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Loads the configuration from the process environment.
    ///
    /// * `DART_API_KEY` - required service credential
    /// * `DART_TIMEOUT_SECS` - optional outbound timeout in seconds (default 30)
    /// * `DART_BASE_URL` - optional override of the API base URL
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`DartConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("DART_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| DartError::ConfigError("DART_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(raw) = lookup("DART_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                DartError::ConfigError(format!("Invalid DART_TIMEOUT_SECS '{}': {}", raw, e))
            })?;
            if secs == 0 {
                return Err(DartError::ConfigError(
                    "DART_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(base_url) = lookup("DART_BASE_URL").filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        Ok(config)
    }
}

/// Bind address and CORS settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads `SERVER_HOST`, `SERVER_PORT` and `CORS_ORIGINS` from the environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("SERVER_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("SERVER_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
