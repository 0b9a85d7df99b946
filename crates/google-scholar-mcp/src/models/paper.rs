//! Paper result models.

use serde::{Deserialize, Serialize};

/// A single paper from a Google Scholar search.
///
/// `title` is always present and non-empty on papers returned from a
/// successful search; every other field is best-effort and may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Author names in provider order. The provider may truncate long
    /// author lists with a trailing ellipsis marker, which is kept as-is.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication venue (journal, conference, or preprint server).
    /// Empty when the provider gives no venue.
    #[serde(default)]
    pub venue: String,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of papers citing this one.
    #[serde(default)]
    pub citations: i64,

    /// Link to the paper's landing page.
    #[serde(default)]
    pub url: Option<String>,

    /// Direct link to a PDF, when the provider lists one.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Opaque id used to look up citing papers via `get_paper_citations`.
    #[serde(default)]
    pub citation_id: Option<String>,

    /// Short result snippet.
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Paper {
    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Whether the author list was truncated by the provider.
    #[must_use]
    pub fn authors_truncated(&self) -> bool {
        self.authors.last().is_some_and(|a| a.ends_with('\u{2026}') || a.ends_with("..."))
    }
}

/// Result of a paper search.
///
/// `papers` is in provider-defined relevance order and must not be
/// re-sorted. `total_results` is an advisory hint only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarResult {
    /// The query string, echoed exactly as given.
    pub query: String,

    /// Matching papers, at most the requested number.
    pub papers: Vec<Paper>,

    /// Provider-supplied total count hint, when present.
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// Result of a citation lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationResult {
    /// Citation id of the source paper.
    pub citation_id: String,

    /// Papers citing the source paper, in provider order.
    pub citing_papers: Vec<Paper>,
}
