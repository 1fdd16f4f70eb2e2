//! JSKOS concept records.
//!
//! Field names follow the JSKOS data format (<https://gbv.github.io/jskos/>).
//! Empty fields are omitted from the serialized record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language tag used for all labels produced from ORCID.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Mapping from language tag to a value.
pub type LanguageMap<T> = BTreeMap<String, T>;

/// A JSKOS concept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Canonical URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Notations (bare identifiers).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notation: Vec<String>,

    /// Preferred label per language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pref_label: LanguageMap<String>,

    /// Alternative labels per language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alt_label: LanguageMap<Vec<String>>,

    /// Description per language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub description: LanguageMap<String>,

    /// Homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Resources about this concept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_of: Vec<Concept>,

    /// Subjects of this concept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<Concept>,
}

impl Concept {
    /// A concept with only a preferred label.
    #[must_use]
    pub fn labeled(language: &str, label: impl Into<String>) -> Self {
        Self {
            pref_label: LanguageMap::from([(language.to_string(), label.into())]),
            ..Self::default()
        }
    }

    /// A concept with only a URL.
    #[must_use]
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Preferred label in the given language.
    #[must_use]
    pub fn pref_label(&self, language: &str) -> Option<&str> {
        self.pref_label.get(language).map(String::as_str)
    }

    /// Alternative labels in the given language.
    #[must_use]
    pub fn alt_labels(&self, language: &str) -> &[String] {
        self.alt_label.get(language).map(Vec::as_slice).unwrap_or_default()
    }

    /// Description in the given language.
    #[must_use]
    pub fn description(&self, language: &str) -> Option<&str> {
        self.description.get(language).map(String::as_str)
    }

    /// First notation if any.
    #[must_use]
    pub fn notation(&self) -> Option<&str> {
        self.notation.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_fields_are_omitted() {
        let concept = Concept::labeled(DEFAULT_LANGUAGE, "biology");
        assert_eq!(
            serde_json::to_value(&concept).unwrap(),
            json!({"prefLabel": {"en": "biology"}})
        );

        let link = Concept::link("https://en.wikipedia.org/wiki/Jane_Doe");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"url": "https://en.wikipedia.org/wiki/Jane_Doe"})
        );
    }

    #[test]
    fn test_camel_case_fields() {
        let concept = Concept {
            uri: Some("http://orcid.org/0000-0002-1825-0097".into()),
            notation: vec!["0000-0002-1825-0097".into()],
            alt_label: LanguageMap::from([("en".to_string(), vec!["J. Doe".to_string()])]),
            subject_of: vec![Concept::link("https://en.wikipedia.org/wiki/X")],
            ..Concept::default()
        };
        let value = serde_json::to_value(&concept).unwrap();
        assert_eq!(value["altLabel"]["en"], json!(["J. Doe"]));
        assert_eq!(value["subjectOf"][0]["url"], "https://en.wikipedia.org/wiki/X");
        assert_eq!(value["notation"], json!(["0000-0002-1825-0097"]));
    }

    #[test]
    fn test_accessors() {
        let concept = Concept::labeled("en", "Jane Doe");
        assert_eq!(concept.pref_label("en"), Some("Jane Doe"));
        assert_eq!(concept.pref_label("de"), None);
        assert!(concept.alt_labels("en").is_empty());
        assert_eq!(concept.notation(), None);
    }
}
