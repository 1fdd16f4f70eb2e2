#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_jskos::mapper::map_profile;
use orcid_jskos::models::SearchResponse;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(SearchResponse {
            orcid_search_results: Some(results),
        }) = serde_json::from_value(json)
        {
            for hit in &results.results {
                let _ = map_profile(&hit.orcid_profile);
            }
        }
    }
});
