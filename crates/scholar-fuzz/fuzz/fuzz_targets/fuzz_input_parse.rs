#![no_main]

use google_scholar_mcp::models::SearchScholarInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as SearchScholarInput
    let _ = serde_json::from_slice::<SearchScholarInput>(data);
});
