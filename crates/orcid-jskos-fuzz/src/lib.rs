//! Fuzzing library for orcid-jskos.
//!
//! This crate provides fuzzing targets for the ORCID document parser, the profile
//! mapper and the identifier recognizer.
//!
//! # Usage
//!
//! ```bash
//! cd crates/orcid-jskos-fuzz
//! cargo +nightly fuzz run fuzz_profile_parse -- -max_total_time=60
//! ```

pub use orcid_jskos::{identifier, lucene, mapper, models};
