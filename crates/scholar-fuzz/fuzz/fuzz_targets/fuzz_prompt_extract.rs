#![no_main]

use google_scholar_mcp::adapters::PromptAdapter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The extractor scans arbitrary model output for a tool call.
    // Should never panic, only return Ok or Err
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = PromptAdapter.parse_text(text);
    }
});
