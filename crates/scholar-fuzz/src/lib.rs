//! Fuzzing library for google-scholar-mcp.
//!
//! This crate provides fuzzing targets for the JSON model deserializers
//! and the prompt-output tool-call extractor.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scholar-fuzz
//! cargo +nightly fuzz run fuzz_prompt_extract -- -max_total_time=60
//! ```

pub use google_scholar_mcp::adapters;
pub use google_scholar_mcp::models;
