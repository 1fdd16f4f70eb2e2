//! Inbound queries and outbound result pages.

use serde::{Deserialize, Serialize};

use super::Concept;

/// Query parameters understood by the service.
///
/// Unknown parameters are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptQuery {
    /// Identifier or URI to look up.
    #[serde(default)]
    pub notation: Option<String>,

    /// URI to look up.
    #[serde(default)]
    pub uri: Option<String>,

    /// Free-text search term.
    #[serde(default)]
    pub search: Option<String>,

    /// Residual request path, e.g. `/0000-0002-1825-0097`.
    #[serde(skip)]
    pub path: Option<String>,
}

impl ConceptQuery {
    /// Lookup by identifier.
    #[must_use]
    pub fn notation(notation: impl Into<String>) -> Self {
        Self {
            notation: Some(notation.into()),
            ..Self::default()
        }
    }

    /// Free-text search.
    #[must_use]
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    /// Attach the residual request path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Search term if present and not empty. Whitespace counts as a term.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Residual path without leading slashes, if not empty.
    #[must_use]
    pub fn path_notation(&self) -> Option<&str> {
        self.path
            .as_deref()
            .map(|p| p.trim_start_matches('/'))
            .filter(|p| !p.is_empty())
    }
}

/// One page of concepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Concepts in result order.
    pub concepts: Vec<Concept>,

    /// Index of the first concept.
    pub offset: usize,

    /// Requested page size.
    pub limit: usize,

    /// Total number of matches, if known.
    pub total: Option<u64>,
}

impl Page {
    /// A page without concepts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total: Some(0),
            ..Self::default()
        }
    }

    /// A page with zero or one concept.
    #[must_use]
    pub fn single(concept: Option<Concept>) -> Self {
        let concepts: Vec<Concept> = concept.into_iter().collect();
        let total = Some(concepts.len() as u64);
        Self {
            limit: concepts.len(),
            concepts,
            offset: 0,
            total,
        }
    }

    /// A page holding a whole result list; the total count is left unset.
    #[must_use]
    pub fn from_concepts(concepts: Vec<Concept>) -> Self {
        Self {
            limit: concepts.len(),
            concepts,
            offset: 0,
            total: None,
        }
    }

    /// Number of concepts on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Check if the page holds no concepts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl IntoIterator for Page {
    type Item = Concept;
    type IntoIter = std::vec::IntoIter<Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_params_ignored() {
        let query: ConceptQuery =
            serde_json::from_value(json!({"notation": "0000-0002-1825-0097", "limit": "10"}))
                .unwrap();
        assert_eq!(query.notation.as_deref(), Some("0000-0002-1825-0097"));
        assert!(query.search.is_none());
    }

    #[test]
    fn test_empty_search_is_absent() {
        assert_eq!(ConceptQuery::search("").search_term(), None);
        assert_eq!(ConceptQuery::default().search_term(), None);
        assert_eq!(ConceptQuery::search("  ").search_term(), Some("  "));
        assert_eq!(ConceptQuery::search("doe").search_term(), Some("doe"));
    }

    #[test]
    fn test_path_notation() {
        let query = ConceptQuery::default().with_path("/0000-0002-1825-0097");
        assert_eq!(query.path_notation(), Some("0000-0002-1825-0097"));
        assert_eq!(ConceptQuery::default().with_path("/").path_notation(), None);
        assert_eq!(ConceptQuery::default().path_notation(), None);
    }

    #[test]
    fn test_page_constructors() {
        assert!(Page::empty().is_empty());
        assert_eq!(Page::empty().total, Some(0));

        let page = Page::single(Some(Concept::labeled("en", "x")));
        assert_eq!(page.len(), 1);
        assert_eq!(page.total, Some(1));

        let page = Page::single(None);
        assert!(page.is_empty());
        assert_eq!(page.total, Some(0));

        let page = Page::from_concepts(vec![Concept::default(), Concept::default()]);
        assert_eq!(page.len(), 2);
        assert_eq!(page.total, None);
    }
}
