//! Data models for Google Scholar entities.
//!
//! Public models are immutable value records produced by the client and
//! consumed by every adapter. Raw SerpAPI payload mirrors live in `serp`
//! and use `#[serde(default)]` throughout so a single malformed result
//! item degrades to defaults instead of failing the whole response.

mod author;
mod inputs;
mod paper;
pub(crate) mod serp;

pub use author::AuthorProfile;
pub use inputs::{
    AuthorProfileInput, PaperCitationsInput, SearchAuthorInput, SearchScholarInput,
    default_num_results,
};
pub use paper::{CitationResult, Paper, ScholarResult};
