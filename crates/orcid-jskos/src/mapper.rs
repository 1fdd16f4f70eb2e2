//! Mapping of ORCID profiles to JSKOS concepts.
//!
//! The mapping is a pure function of the profile. Not mapped: contact details (email,
//! address) and external identifiers (Scopus, ResearcherID).

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Concept, DEFAULT_LANGUAGE, LanguageMap, OrcidProfile, PersonalDetails, Text};

/// Links to Wikipedia articles.
static WIKIPEDIA_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://\w+\.wikipedia\.org/wiki/.+").expect("valid Wikipedia pattern")
});

/// Keyword fields often hold a comma separated list.
static KEYWORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("valid keyword separator"));

/// Check whether a URL points to a Wikipedia article.
#[must_use]
pub fn is_wikipedia_article(url: &str) -> bool {
    WIKIPEDIA_ARTICLE.is_match(url)
}

/// Split a keyword field into single keywords.
///
/// Fragments are trimmed, empty fragments are dropped.
#[must_use]
pub fn split_keywords(field: &str) -> Vec<&str> {
    KEYWORD_SEPARATOR.split(field).map(str::trim).filter(|k| !k.is_empty()).collect()
}

/// Resolve the preferred name and the names it replaced.
///
/// The full name is given names plus family name. A credit name that differs from it
/// becomes the preferred name and demotes the full name to an alternative.
fn resolve_name(details: &PersonalDetails) -> (String, Vec<String>) {
    let mut name = details.given_names.value.clone();

    if let Some(family) = details.family_name.as_ref().and_then(Text::as_str) {
        name = format!("{name} {family}");
    }

    let mut demoted = Vec::new();
    if let Some(credit) = details.credit_name.as_ref().and_then(Text::as_str) {
        if credit != name {
            demoted.push(std::mem::replace(&mut name, credit.to_string()));
        }
    }

    (name, demoted)
}

/// Map an ORCID profile to a JSKOS concept.
#[must_use]
pub fn map_profile(profile: &OrcidProfile) -> Concept {
    let identifier = &profile.orcid_identifier;
    let bio = &profile.orcid_bio;
    let details = &bio.personal_details;

    let mut concept = Concept {
        uri: Some(identifier.uri.clone()),
        notation: vec![identifier.path.clone()],
        ..Concept::default()
    };

    // names
    let (name, mut other_names) = resolve_name(details);

    if let Some(others) = &details.other_names {
        other_names.extend(
            others
                .other_name
                .iter()
                .filter_map(Text::as_str)
                .filter(|n| *n != name)
                .map(String::from),
        );
    }

    concept.pref_label = LanguageMap::from([(DEFAULT_LANGUAGE.to_string(), name)]);
    if !other_names.is_empty() {
        concept.alt_label = LanguageMap::from([(DEFAULT_LANGUAGE.to_string(), other_names)]);
    }

    // biography
    if let Some(biography) = bio.biography.as_ref().filter(|b| b.is_public()) {
        if let Some(text) = biography.as_str() {
            concept.description.insert(DEFAULT_LANGUAGE.to_string(), text.to_string());
        }
    }

    // external website links, the last homepage wins
    if let Some(urls) = &bio.researcher_urls {
        for href in urls.researcher_url.iter().filter_map(|u| u.href()) {
            if is_wikipedia_article(href) {
                concept.subject_of.push(Concept::link(href));
            } else {
                concept.url = Some(href.to_string());
            }
        }
    }

    // keywords
    if let Some(keywords) = &bio.keywords {
        concept.subject.extend(
            keywords
                .keyword
                .iter()
                .filter_map(Text::as_str)
                .flat_map(split_keywords)
                .map(|keyword| Concept::labeled(DEFAULT_LANGUAGE, keyword)),
        );
    }

    concept
}
