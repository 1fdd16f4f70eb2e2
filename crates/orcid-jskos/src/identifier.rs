//! ORCID identifier recognition.
//!
//! A [`UriSpace`] pairs a URI namespace with a notation pattern. A candidate string is
//! either a bare notation or a URI inside the namespace; anything else is simply not an
//! identifier of this space.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::api;

/// Notation pattern of ORCID iDs: four groups of four ASCII digits, the final
/// character may be the checksum placeholder `X`.
pub const ORCID_PATTERN: &str = r"^([0-9]{4}-){3}[0-9]{3}[0-9X]$";

/// A recognized identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Bare notation, e.g. `0000-0002-1825-0097`.
    pub notation: String,
    /// Canonical URI, e.g. `http://orcid.org/0000-0002-1825-0097`.
    pub uri: String,
}

/// URI namespace with a notation grammar.
#[derive(Debug, Clone)]
pub struct UriSpace {
    base: String,
    pattern: Regex,
}

impl UriSpace {
    /// Create a URI space from a namespace and a notation regex.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regular expression.
    pub fn new(base: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            base: base.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// The ORCID URI space (`http://orcid.org/`).
    #[must_use]
    pub fn orcid() -> Self {
        Self::new(api::URI_SPACE, ORCID_PATTERN).expect("valid ORCID notation pattern")
    }

    /// Namespace of this URI space.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Recognize a bare notation or a URI of this space.
    #[must_use]
    pub fn recognize(&self, input: &str) -> Option<Identifier> {
        let notation = input.strip_prefix(self.base.as_str()).unwrap_or(input);
        self.match_notation(notation)
    }

    /// Recognize a bare notation only.
    #[must_use]
    pub fn match_notation(&self, notation: &str) -> Option<Identifier> {
        if !self.pattern.is_match(notation) {
            return None;
        }

        Some(Identifier {
            notation: notation.to_string(),
            uri: format!("{}{}", self.base, notation),
        })
    }

    /// Recognize a URI only; bare notations are rejected.
    #[must_use]
    pub fn match_uri(&self, uri: &str) -> Option<Identifier> {
        self.match_notation(uri.strip_prefix(self.base.as_str())?)
    }
}

impl Default for UriSpace {
    fn default() -> Self {
        Self::orcid()
    }
}
