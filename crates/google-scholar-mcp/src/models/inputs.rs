//! Typed inputs for the registered tools.
//!
//! These deserialize the argument mappings that arrive through the Tool
//! Registry, with serde defaults mirroring the declared JSON schemas.

use serde::{Deserialize, Serialize};

use crate::config::api;

/// Default result count for searches.
#[must_use]
pub fn default_num_results() -> u32 {
    api::DEFAULT_NUM_RESULTS
}

/// Input for `search_scholar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchScholarInput {
    /// Search query.
    pub query: String,

    /// Filter papers published from this year (inclusive).
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Filter papers published until this year (inclusive).
    #[serde(default)]
    pub year_to: Option<i32>,

    /// Maximum number of results to return.
    #[serde(default = "default_num_results")]
    pub num_results: u32,
}

/// Input for `search_author`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAuthorInput {
    /// Name of the author to search for.
    pub name: String,
}

/// Input for `get_author_profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfileInput {
    /// Google Scholar author id.
    pub author_id: String,
}

/// Input for `get_paper_citations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperCitationsInput {
    /// Citation id from a previous search result.
    pub citation_id: String,

    /// Maximum number of citing papers to return.
    #[serde(default = "default_num_results")]
    pub num_results: u32,
}
