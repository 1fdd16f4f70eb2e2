//! ORCID profile documents as returned by the public API (version 1.2, JSON).
//!
//! See <https://members.orcid.org/api/xml-orcid-bio> for the schema. Only the parts
//! that are mapped to JSKOS are modelled; unknown fields are ignored. Given names are
//! the only required value of a profile, so a profile without them fails to parse.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A required text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredText {
    /// Field value.
    pub value: String,
}

/// An optional text field with visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Field value.
    #[serde(default)]
    pub value: Option<String>,

    /// Visibility flag (`PUBLIC`, `LIMITED`, `PRIVATE`, ...).
    #[serde(default)]
    pub visibility: Option<String>,
}

impl Text {
    /// Create a public text value.
    #[must_use]
    pub fn public(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            visibility: Some("PUBLIC".to_string()),
        }
    }

    /// Get the value if present.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check the visibility flag, ignoring case.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("public"))
    }
}

/// The identifier block of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidIdentifier {
    /// Full URI, e.g. `http://orcid.org/0000-0002-1825-0097`.
    pub uri: String,

    /// Bare identifier, e.g. `0000-0002-1825-0097`.
    pub path: String,
}

/// One researcher profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrcidProfile {
    /// Identifier block.
    pub orcid_identifier: OrcidIdentifier,

    /// Biographical part.
    pub orcid_bio: OrcidBio,
}

/// Biographical part of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrcidBio {
    /// Names.
    pub personal_details: PersonalDetails,

    /// Free-text biography.
    #[serde(default)]
    pub biography: Option<Text>,

    /// Links to external websites.
    #[serde(default)]
    pub researcher_urls: Option<ResearcherUrls>,

    /// Keywords entered by the researcher.
    #[serde(default)]
    pub keywords: Option<Keywords>,
}

/// Names of a researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersonalDetails {
    /// Given names.
    pub given_names: RequiredText,

    /// Family name.
    #[serde(default)]
    pub family_name: Option<Text>,

    /// Name the researcher wants to be credited with.
    #[serde(default)]
    pub credit_name: Option<Text>,

    /// Alternative names.
    #[serde(default)]
    pub other_names: Option<OtherNames>,
}

/// Container of alternative names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OtherNames {
    /// Alternative names in source order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_name: Vec<Text>,
}

/// Container of researcher URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearcherUrls {
    /// Links in source order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub researcher_url: Vec<ResearcherUrl>,
}

/// A named link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearcherUrl {
    /// Display name of the link.
    #[serde(default)]
    pub url_name: Option<Text>,

    /// Link target.
    #[serde(default)]
    pub url: Option<Text>,
}

impl ResearcherUrl {
    /// Link target if present.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.url.as_ref()?.as_str()
    }
}

/// Container of keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Keywords {
    /// Keyword fields in source order. A field may hold several comma separated
    /// keywords.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyword: Vec<Text>,
}

/// Body of `GET /{id}/orcid-bio/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileResponse {
    /// The requested profile.
    #[serde(default)]
    pub orcid_profile: Option<OrcidProfile>,
}

/// Body of `GET /search/orcid-bio/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchResponse {
    /// The result set.
    #[serde(default)]
    pub orcid_search_results: Option<SearchResults>,
}

/// A set of search hits.
///
/// `num-found` and the relevancy scores are not read: result pages carry no total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Hits in relevance order.
    #[serde(
        rename = "orcid-search-result",
        default,
        deserialize_with = "lenient_results"
    )]
    pub results: Vec<SearchResult>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchResult {
    /// Matching profile.
    pub orcid_profile: OrcidProfile,
}

/// Parse hits one by one so that a single malformed profile does not discard the page.
fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<SearchResult>(value) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed search result");
                None
            }
        })
        .collect())
}
