//! Configuration for the ORCID JSKOS service.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// OAuth token endpoint.
    pub const TOKEN_URL: &str = "https://orcid.org/oauth/token";

    /// Public ORCID API, version 1.2.
    pub const API_URL: &str = "https://pub.orcid.org/v1.2";

    /// URI space of ORCID identifiers.
    pub const URI_SPACE: &str = "http://orcid.org/";

    /// Scope requested in the client-credentials exchange.
    pub const READ_PUBLIC_SCOPE: &str = "/read-public";

    /// Media type of ORCID API documents.
    pub const ORCID_JSON: &str = "application/orcid+json";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Upper bound for cached access tokens.
    pub const TOKEN_CACHE_MAX_SIZE: u64 = 16;
}

/// Service configuration.
#[derive(Clone)]
pub struct Config {
    /// ORCID client id (optional).
    pub client_id: Option<String>,

    /// ORCID client secret (optional).
    pub client_secret: Option<String>,

    /// Token endpoint (for testing with mock servers).
    pub token_url: String,

    /// Base URL of the profile API (for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Lifetime of cached access tokens. `None` exchanges a fresh token per call.
    pub token_cache_ttl: Option<Duration>,

    /// Report upstream faults as errors instead of empty results.
    pub surface_upstream_errors: bool,
}

impl Config {
    /// Create a new configuration with optional credentials.
    ///
    /// Empty strings are treated like missing values.
    #[must_use]
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id: client_id.filter(|s| !s.is_empty()),
            client_secret: client_secret.filter(|s| !s.is_empty()),
            token_url: api::TOKEN_URL.to_string(),
            api_url: api::API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            token_cache_ttl: None,
            surface_upstream_errors: false,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            client_id: Some("APP-TESTCLIENT".to_string()),
            client_secret: Some("test-secret".to_string()),
            token_url: format!("{}/oauth/token", base_url),
            api_url: format!("{}/v1.2", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            token_cache_ttl: None,
            surface_upstream_errors: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ORCID_CLIENT_ID`, `ORCID_CLIENT_SECRET`, `ORCID_TOKEN_CACHE_SECS`
    /// and `ORCID_STRICT_UPSTREAM`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let client_id = std::env::var("ORCID_CLIENT_ID").ok();
        let client_secret = std::env::var("ORCID_CLIENT_SECRET").ok();

        let mut config = Self::new(client_id, client_secret);

        if let Ok(secs) = std::env::var("ORCID_TOKEN_CACHE_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid ORCID_TOKEN_CACHE_SECS '{secs}': {e}"))?;
            config = config.with_token_cache(secs);
        }

        if let Ok(strict) = std::env::var("ORCID_STRICT_UPSTREAM") {
            config.surface_upstream_errors = matches!(strict.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Enable the access token cache. Zero seconds disables it.
    #[must_use]
    pub fn with_token_cache(mut self, secs: u64) -> Self {
        self.token_cache_ttl = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    /// Check if both client id and secret are configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("has_client_secret", &self.client_secret.is_some())
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("token_cache_ttl", &self.token_cache_ttl)
            .field("surface_upstream_errors", &self.surface_upstream_errors)
            .finish()
    }
}
