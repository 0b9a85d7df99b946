//! Author profile model.

use serde::{Deserialize, Serialize};

use super::Paper;

/// An author profile from Google Scholar.
///
/// Produced both by `search_author` (candidate matches, sparse fields) and
/// by `get_author_profile` (full profile with publication list).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Google Scholar author id (e.g. "JicYPdAAAAAJ"), when known.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    pub name: String,

    /// Affiliation line.
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Verified email domain.
    #[serde(default)]
    pub email_domain: Option<String>,

    /// Declared research interests.
    #[serde(default)]
    pub interests: Vec<String>,

    /// Total citation count across all publications.
    #[serde(default)]
    pub total_citations: Option<i64>,

    /// h-index.
    #[serde(default)]
    pub h_index: Option<i64>,

    /// i10-index.
    #[serde(default)]
    pub i10_index: Option<i64>,

    /// The author's papers. May be a subset of their full record.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_profile_defaults() {
        let profile: AuthorProfile =
            serde_json::from_str(r#"{"name": "Geoffrey Hinton"}"#).unwrap();
        assert_eq!(profile.name, "Geoffrey Hinton");
        assert!(profile.author_id.is_none());
        assert!(profile.h_index.is_none());
        assert!(profile.papers.is_empty());
    }
}
