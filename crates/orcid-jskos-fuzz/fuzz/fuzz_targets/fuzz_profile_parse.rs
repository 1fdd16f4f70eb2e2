#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_jskos::mapper::map_profile;
use orcid_jskos::models::ProfileResponse;

fuzz_target!(|data: &[u8]| {
    // Parsing may fail, mapping a parsed profile must not panic
    if let Ok(ProfileResponse {
        orcid_profile: Some(profile),
    }) = serde_json::from_slice(data)
    {
        let concept = map_profile(&profile);
        let _ = serde_json::to_string(&concept);
    }
});
