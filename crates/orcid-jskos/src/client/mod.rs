//! ORCID API client.
//!
//! Provides async HTTP client with:
//! - OAuth client-credentials token exchange (`/read-public` scope)
//! - Profile lookup and Lucene search against the public API
//! - Optional token cache, bounded by the configured TTL and the token's `expires_in`
//!
//! Clean absence (no credentials, unknown identifier) is `Ok(None)`; transport and
//! protocol faults are `Err`. There are no retries.

mod middleware;

use std::time::{Duration, Instant};

use anyhow::Context;
use moka::Expiry;
use moka::future::Cache;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::Deserialize;

pub use middleware::RequestLogger;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{OrcidProfile, ProfileResponse, SearchResponse, SearchResults};

/// Source of ORCID profiles.
///
/// Implemented by [`OrcidClient`]; the dispatcher only depends on this trait.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch a profile by bare identifier.
    async fn fetch_profile(&self, notation: &str) -> ClientResult<Option<OrcidProfile>>;

    /// Search profiles with a Lucene query clause.
    async fn search_profiles(&self, query: &str) -> ClientResult<Option<SearchResults>>;

    /// Whether requests can be authenticated at all.
    fn has_credentials(&self) -> bool;
}

/// Body of a successful token exchange.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// A cached access token and its lifetime.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    ttl: Duration,
}

/// Per-entry expiry: every token lives for its own `ttl`.
struct TokenExpiry;

impl Expiry<String, CachedToken> for TokenExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedToken,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Lifetime of a cached token: the configured TTL, shortened to `expires_in`.
fn token_ttl(configured: Duration, expires_in: Option<u64>) -> Duration {
    expires_in.map_or(configured, |secs| configured.min(Duration::from_secs(secs)))
}

/// ORCID API client.
#[derive(Clone)]
pub struct OrcidClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Access token cache, if enabled.
    token_cache: Option<Cache<String, CachedToken>>,

    /// Upper bound for the lifetime of cached tokens.
    token_cache_ttl: Option<Duration>,

    /// Client id (optional).
    client_id: Option<String>,

    /// Client secret (optional).
    client_secret: Option<String>,

    /// OAuth token endpoint.
    token_url: String,

    /// Profile API base URL.
    api_url: String,
}

impl OrcidClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an endpoint URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let token_url = Self::endpoint(&config.token_url)?;
        let api_url = Self::endpoint(&config.api_url)?;

        let client = Client::builder()
            .user_agent(concat!("orcid-jskos/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestLogger).build();

        let token_cache = config.token_cache_ttl.map(|_| {
            Cache::builder()
                .max_capacity(api::TOKEN_CACHE_MAX_SIZE)
                .expire_after(TokenExpiry)
                .build()
        });

        Ok(Self {
            client,
            token_cache,
            token_cache_ttl: config.token_cache_ttl,
            client_id: config.client_id,
            client_secret: config.client_secret,
            token_url,
            api_url,
        })
    }

    /// Validate a configured endpoint and strip trailing slashes.
    fn endpoint(raw: &str) -> anyhow::Result<String> {
        let parsed =
            url::Url::parse(raw).with_context(|| format!("invalid endpoint URL '{raw}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("endpoint URL '{raw}' must use http or https");
        }
        Ok(raw.trim_end_matches('/').to_string())
    }

    /// Check if client credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Check if access tokens are cached.
    #[must_use]
    pub fn caches_tokens(&self) -> bool {
        self.token_cache.is_some()
    }

    /// Get an OAuth access token.
    ///
    /// Returns `Ok(None)` without credentials. Without the token cache every call
    /// performs a fresh exchange.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the endpoint does not answer with 200.
    pub async fn obtain_token(&self) -> ClientResult<Option<String>> {
        let (Some(client_id), Some(client_secret)) =
            (self.client_id.as_deref(), self.client_secret.as_deref())
        else {
            tracing::debug!("No ORCID client credentials, skipping token exchange");
            return Ok(None);
        };

        let cache_key = Self::cache_key(client_id);
        if let Some(cache) = &self.token_cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::debug!("Using cached access token");
                return Ok(Some(cached.access_token));
            }
        }

        let form = serde_urlencoded::to_string([
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", api::READ_PUBLIC_SCOPE),
            ("grant_type", "client_credentials"),
        ])?;

        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "ORCID token exchange rejected");
            return Err(ClientError::TokenRejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        tracing::debug!(expires_in = ?token.expires_in, "Obtained access token");

        if let (Some(cache), Some(configured)) = (&self.token_cache, self.token_cache_ttl) {
            let ttl = token_ttl(configured, token.expires_in);
            if ttl.is_zero() {
                tracing::debug!("Access token expires immediately, not caching");
            } else {
                let cached = CachedToken {
                    access_token: token.access_token.clone(),
                    ttl,
                };
                cache.insert(cache_key, cached).await;
            }
        }

        Ok(Some(token.access_token))
    }

    /// Get a profile by ORCID iD.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn fetch_profile(&self, notation: &str) -> ClientResult<Option<OrcidProfile>> {
        let Some(token) = self.obtain_token().await? else {
            return Ok(None);
        };

        let url = format!("{}/{}/orcid-bio/", self.api_url, notation);
        let response: Option<ProfileResponse> = self.get(&url, &token, &[]).await?;

        Ok(response.and_then(|r| r.orcid_profile))
    }

    /// Search for profiles.
    ///
    /// `query` is passed verbatim as Lucene query, see [`crate::lucene`].
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_profiles(&self, query: &str) -> ClientResult<Option<SearchResults>> {
        let Some(token) = self.obtain_token().await? else {
            return Ok(None);
        };

        let url = format!("{}/search/orcid-bio/", self.api_url);
        let response: Option<SearchResponse> = self.get(&url, &token, &[("q", query)]).await?;

        Ok(response.and_then(|r| r.orcid_search_results))
    }

    /// Make an authenticated GET request.
    ///
    /// `Ok(None)` for 404 and 410.
    async fn get<T>(
        &self,
        url: &str,
        token: &str,
        params: &[(&str, &str)],
    ) -> ClientResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))?;
        bearer.set_sensitive(true);

        let response = self
            .client
            .get(url)
            .query(params)
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, api::ORCID_JSON)
            .header(ACCEPT, api::ORCID_JSON)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            StatusCode::NOT_FOUND | StatusCode::GONE => {
                tracing::debug!(url, "Not found upstream");
                Ok(None)
            }
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::unexpected_status(status.as_u16(), text))
            }
        }
    }

    /// Generate token cache key.
    fn cache_key(client_id: &str) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(b"token|");
        hasher.update(client_id.as_bytes());

        format!("{:x}", hasher.finalize())
    }
}

#[async_trait::async_trait]
impl ProfileSource for OrcidClient {
    async fn fetch_profile(&self, notation: &str) -> ClientResult<Option<OrcidProfile>> {
        Self::fetch_profile(self, notation).await
    }

    async fn search_profiles(&self, query: &str) -> ClientResult<Option<SearchResults>> {
        Self::search_profiles(self, query).await
    }

    fn has_credentials(&self) -> bool {
        Self::has_credentials(self)
    }
}

impl std::fmt::Debug for OrcidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrcidClient")
            .field("client_id", &self.client_id)
            .field("has_credentials", &self.has_credentials())
            .field("caches_tokens", &self.caches_tokens())
            .field("api_url", &self.api_url)
            .finish()
    }
}
