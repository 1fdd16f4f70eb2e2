#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_jskos::identifier::UriSpace;
use orcid_jskos::lucene::lucene_query;

fuzz_target!(|data: &str| {
    let space = UriSpace::orcid();
    if let Some(id) = space.recognize(data) {
        assert_eq!(id.uri, format!("{}{}", space.base(), id.notation));
    }

    let clause = lucene_query("text", data);
    assert!(clause.starts_with("text:\"") && clause.ends_with('"'));
});
