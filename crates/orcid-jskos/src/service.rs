//! Query dispatch: identifier lookup or full-text search.

use std::sync::Arc;

use crate::client::{OrcidClient, ProfileSource};
use crate::config::Config;
use crate::error::ServiceResult;
use crate::identifier::{Identifier, UriSpace};
use crate::lucene::lucene_query;
use crate::mapper::map_profile;
use crate::models::{ConceptQuery, Page};

/// Lucene field searched for free-text queries.
pub const SEARCH_FIELD: &str = "text";

/// JSKOS service backed by ORCID.
#[derive(Clone)]
pub struct OrcidService {
    source: Arc<dyn ProfileSource>,
    uri_space: UriSpace,
}

impl OrcidService {
    /// Create a service on top of an ORCID client.
    #[must_use]
    pub fn new(client: OrcidClient) -> Self {
        Self::with_source(Arc::new(client), UriSpace::orcid())
    }

    /// Create a service on top of any profile source.
    #[must_use]
    pub fn with_source(source: Arc<dyn ProfileSource>, uri_space: UriSpace) -> Self {
        Self { source, uri_space }
    }

    /// Create a service and its client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        Ok(Self::new(OrcidClient::new(config)?))
    }

    /// URI space of recognized identifiers.
    #[must_use]
    pub const fn uri_space(&self) -> &UriSpace {
        &self.uri_space
    }

    /// Whether upstream requests can be authenticated.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.source.has_credentials()
    }

    /// Find the identifier a lookup query refers to.
    ///
    /// Tries `notation` (bare or URI), then `uri`, then the residual path. When both
    /// `notation` and `uri` are given they must agree. Empty parameters count as absent.
    #[must_use]
    pub fn resolve(&self, query: &ConceptQuery) -> Option<Identifier> {
        let by_notation = query
            .notation
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| self.uri_space.recognize(n));
        let by_uri = query
            .uri
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| self.uri_space.match_uri(u));

        match (by_notation, by_uri) {
            (Some(a), Some(b)) => a.filter(|a| b.as_ref() == Some(a)),
            (Some(id), None) | (None, Some(id)) => id,
            (None, None) => query.path_notation().and_then(|p| self.uri_space.recognize(p)),
        }
    }

    /// Answer a query, reporting upstream faults.
    ///
    /// A non-empty `search` parameter takes precedence over identifier lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream API fails. Unknown identifiers, missing
    /// credentials and unrecognized queries are empty pages, not errors.
    pub async fn try_query(&self, query: &ConceptQuery) -> ServiceResult<Page> {
        if let Some(term) = query.search_term() {
            let clause = lucene_query(SEARCH_FIELD, term);
            tracing::debug!(query = %clause, "Searching ORCID profiles");

            let Some(results) = self.source.search_profiles(&clause).await? else {
                return Ok(Page::empty());
            };

            let concepts = results
                .results
                .iter()
                .map(|hit| map_profile(&hit.orcid_profile))
                .collect();
            return Ok(Page::from_concepts(concepts));
        }

        let Some(id) = self.resolve(query) else {
            tracing::debug!(?query, "No ORCID identifier in query");
            return Ok(Page::empty());
        };

        tracing::debug!(notation = %id.notation, "Fetching ORCID profile");
        let profile = self.source.fetch_profile(&id.notation).await?;

        Ok(Page::single(profile.as_ref().map(map_profile)))
    }

    /// Answer a query; upstream faults yield an empty page.
    pub async fn query(&self, query: &ConceptQuery) -> Page {
        match self.try_query(query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "ORCID request failed, returning empty result");
                Page::empty()
            }
        }
    }
}

impl std::fmt::Debug for OrcidService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrcidService")
            .field("uri_space", &self.uri_space.base())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
