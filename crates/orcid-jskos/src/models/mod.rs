//! Data models: ORCID API documents on the input side, JSKOS records on the output side.
//!
//! ORCID documents use `#[serde(rename_all = "kebab-case")]` to match the API naming,
//! JSKOS records use camelCase.

mod concept;
mod profile;
mod query;

pub use concept::{Concept, DEFAULT_LANGUAGE, LanguageMap};
pub use profile::{
    Keywords, OrcidBio, OrcidIdentifier, OrcidProfile, OtherNames, PersonalDetails,
    ProfileResponse, RequiredText, ResearcherUrl, ResearcherUrls, SearchResponse,
    SearchResult, SearchResults, Text,
};
pub use query::{ConceptQuery, Page};
