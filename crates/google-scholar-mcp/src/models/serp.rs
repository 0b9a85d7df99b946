//! Raw SerpAPI payload mirrors and their conversion into public models.
//!
//! Every field is `#[serde(default)]` so a malformed individual result item
//! degrades to defaults instead of failing the whole response. Only a
//! malformed top-level payload is an error, and that is the client's call.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{AuthorProfile, Paper};

/// First four-digit year in a string, 1900-2099.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year regex"));

/// Top-level payload for `google_scholar` searches (including `cites`
/// lookups).
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub search_information: Option<SearchInformation>,
    #[serde(default)]
    pub organic_results: Option<Vec<OrganicResult>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchInformation {
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// One organic search result item.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub publication_info: Option<PublicationInfo>,
    #[serde(default)]
    pub inline_links: Option<InlineLinks>,
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PublicationInfo {
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InlineLinks {
    #[serde(default)]
    pub cited_by: Option<CitedByLink>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CitedByLink {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub cites_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Resource {
    #[serde(default)]
    pub link: Option<String>,
}

impl OrganicResult {
    /// Convert into a [`Paper`], falling back to defaults field by field.
    pub(crate) fn into_paper(self) -> Paper {
        let summary =
            self.publication_info.and_then(|p| p.summary).unwrap_or_default();
        let (authors, venue, year) = parse_summary(&summary);

        let (citations, citation_id) = match self.inline_links.and_then(|l| l.cited_by) {
            Some(cited_by) => (cited_by.total.unwrap_or(0), cited_by.cites_id),
            None => (0, None),
        };

        let pdf_url = self
            .resources
            .and_then(|r| r.into_iter().next())
            .and_then(|r| r.link)
            .filter(|l| !l.is_empty());

        Paper {
            title: non_empty_or_unknown(self.title),
            authors,
            venue,
            year,
            citations,
            url: self.link.filter(|l| !l.is_empty()),
            pdf_url,
            citation_id,
            snippet: self.snippet.filter(|s| !s.is_empty()),
        }
    }
}

/// Top-level payload for `google_scholar_profiles` author searches.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfilesResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub profiles: Option<Vec<ProfileEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProfileEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub affiliations: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cited_by: Option<i64>,
    #[serde(default)]
    pub interests: Option<Vec<Interest>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Interest {
    #[serde(default)]
    pub title: Option<String>,
}

impl ProfileEntry {
    pub(crate) fn into_profile(self) -> AuthorProfile {
        AuthorProfile {
            author_id: self.author_id.filter(|id| !id.is_empty()),
            name: non_empty_or_unknown(self.name),
            affiliation: self.affiliations.filter(|a| !a.is_empty()),
            email_domain: self.email.filter(|e| !e.is_empty()),
            interests: interest_titles(self.interests),
            total_citations: self.cited_by,
            h_index: None,
            i10_index: None,
            papers: Vec::new(),
        }
    }
}

/// Top-level payload for `google_scholar_author` profile lookups.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorEntry>,
    #[serde(default)]
    pub cited_by: Option<AuthorCitedBy>,
    #[serde(default)]
    pub articles: Option<Vec<ArticleEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub affiliations: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<Interest>>,
}

/// The citation metrics table: one row per metric, each with an
/// all-time column.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorCitedBy {
    #[serde(default)]
    pub table: Option<Vec<MetricsRow>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MetricsRow {
    #[serde(default)]
    pub citations: Option<MetricStat>,
    #[serde(default)]
    pub h_index: Option<MetricStat>,
    #[serde(default)]
    pub i10_index: Option<MetricStat>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MetricStat {
    #[serde(default)]
    pub all: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ArticleEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    /// SerpAPI serves the year as a string.
    #[serde(default)]
    pub year: Option<serde_json::Value>,
    #[serde(default)]
    pub cited_by: Option<ArticleCitedBy>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ArticleCitedBy {
    #[serde(default)]
    pub value: Option<i64>,
}

impl AuthorResponse {
    /// Assemble the full profile. Returns `None` when the payload carries
    /// no author entity at all.
    pub(crate) fn into_profile(self) -> Option<AuthorProfile> {
        let author = self.author?;
        author.name.as_deref().filter(|n| !n.is_empty())?;

        let (total_citations, h_index, i10_index) = match self.cited_by.and_then(|c| c.table) {
            Some(rows) => {
                let mut totals = (None, None, None);
                for row in rows {
                    if let Some(stat) = row.citations {
                        totals.0 = stat.all;
                    }
                    if let Some(stat) = row.h_index {
                        totals.1 = stat.all;
                    }
                    if let Some(stat) = row.i10_index {
                        totals.2 = stat.all;
                    }
                }
                totals
            }
            None => (None, None, None),
        };

        let papers = self
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(ArticleEntry::into_paper)
            .collect();

        Some(AuthorProfile {
            author_id: None,
            name: non_empty_or_unknown(author.name),
            affiliation: author.affiliations.filter(|a| !a.is_empty()),
            email_domain: author.email.filter(|e| !e.is_empty()),
            interests: interest_titles(author.interests),
            total_citations,
            h_index,
            i10_index,
            papers,
        })
    }
}

impl ArticleEntry {
    fn into_paper(self) -> Paper {
        let year = self.year.and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        });

        Paper {
            title: non_empty_or_unknown(self.title),
            authors: split_authors(self.authors.as_deref().unwrap_or_default()),
            venue: self.publication.unwrap_or_default(),
            year,
            citations: self.cited_by.and_then(|c| c.value).unwrap_or(0),
            url: self.link.filter(|l| !l.is_empty()),
            pdf_url: None,
            citation_id: None,
            snippet: None,
        }
    }
}

/// Parse a publication summary of the form `"Authors - Venue, Year - host"`.
///
/// The author list is everything before the first `" - "`; venue and year
/// come from the last segment, with the year being the first four-digit
/// match and the venue the text before the last comma.
pub(crate) fn parse_summary(summary: &str) -> (Vec<String>, String, Option<i32>) {
    if summary.is_empty() {
        return (Vec::new(), String::new(), None);
    }

    let parts: Vec<&str> = summary.split(" - ").collect();
    let authors = split_authors(parts[0]);

    if parts.len() < 2 {
        return (authors, String::new(), None);
    }

    let venue_year = parts[parts.len() - 1];
    let year = YEAR_RE.find(venue_year).and_then(|m| m.as_str().parse().ok());

    let venue = match venue_year.rfind(',') {
        Some(idx) => venue_year[..idx].trim().to_string(),
        None => venue_year.trim().to_string(),
    };

    (authors, venue, year)
}

fn split_authors(list: &str) -> Vec<String> {
    list.split(", ")
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn interest_titles(interests: Option<Vec<Interest>>) -> Vec<String> {
    interests
        .unwrap_or_default()
        .into_iter()
        .filter_map(|i| i.title)
        .filter(|t| !t.is_empty())
        .collect()
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_full() {
        let (authors, venue, year) = parse_summary(
            "A Vaswani, N Shazeer, N Parmar\u{2026} - Advances in neural information \
             processing systems, 2017",
        );
        assert_eq!(authors, vec!["A Vaswani", "N Shazeer", "N Parmar\u{2026}"]);
        assert_eq!(venue, "Advances in neural information processing systems");
        assert_eq!(year, Some(2017));
    }

    #[test]
    fn test_parse_summary_no_year() {
        let (authors, venue, year) = parse_summary("J Smith - arXiv preprint");
        assert_eq!(authors, vec!["J Smith"]);
        assert_eq!(venue, "arXiv preprint");
        assert_eq!(year, None);
    }

    #[test]
    fn test_parse_summary_authors_only() {
        let (authors, venue, year) = parse_summary("J Smith, K Jones");
        assert_eq!(authors, vec!["J Smith", "K Jones"]);
        assert_eq!(venue, "");
        assert_eq!(year, None);
    }

    #[test]
    fn test_parse_summary_empty() {
        let (authors, venue, year) = parse_summary("");
        assert!(authors.is_empty());
        assert!(venue.is_empty());
        assert!(year.is_none());
    }

    #[test]
    fn test_organic_result_tolerates_missing_fields() {
        let raw: OrganicResult = serde_json::from_str("{}").unwrap();
        let paper = raw.into_paper();
        assert_eq!(paper.title, "Unknown");
        assert_eq!(paper.citations, 0);
        assert!(paper.url.is_none());
    }

    #[test]
    fn test_organic_result_full() {
        let raw: OrganicResult = serde_json::from_str(
            r#"{
                "title": "Attention Is All You Need",
                "link": "https://example.org/paper",
                "snippet": "The dominant sequence transduction models...",
                "publication_info": {
                    "summary": "A Vaswani, N Shazeer - Advances in neural information processing systems, 2017"
                },
                "inline_links": {"cited_by": {"total": 100000, "cites_id": "2960712678066186980"}},
                "resources": [{"link": "https://example.org/paper.pdf"}]
            }"#,
        )
        .unwrap();

        let paper = raw.into_paper();
        assert_eq!(paper.title, "Attention Is All You Need");
        assert_eq!(paper.year, Some(2017));
        assert_eq!(paper.citations, 100_000);
        assert_eq!(paper.citation_id.as_deref(), Some("2960712678066186980"));
        assert_eq!(paper.pdf_url.as_deref(), Some("https://example.org/paper.pdf"));
    }

    #[test]
    fn test_author_response_without_author_is_none() {
        let raw: AuthorResponse = serde_json::from_str("{}").unwrap();
        assert!(raw.into_profile().is_none());
    }

    #[test]
    fn test_author_response_metrics_table() {
        let raw: AuthorResponse = serde_json::from_str(
            r#"{
                "author": {"name": "Geoffrey Hinton", "affiliations": "University of Toronto"},
                "cited_by": {"table": [
                    {"citations": {"all": 700000}},
                    {"h_index": {"all": 186}},
                    {"i10_index": {"all": 500}}
                ]},
                "articles": [
                    {"title": "Deep learning", "year": "2015", "cited_by": {"value": 80000}}
                ]
            }"#,
        )
        .unwrap();

        let profile = raw.into_profile().unwrap();
        assert_eq!(profile.name, "Geoffrey Hinton");
        assert_eq!(profile.total_citations, Some(700_000));
        assert_eq!(profile.h_index, Some(186));
        assert_eq!(profile.i10_index, Some(500));
        assert_eq!(profile.papers.len(), 1);
        assert_eq!(profile.papers[0].year, Some(2015));
    }
}
