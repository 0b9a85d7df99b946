//! Plain-text output formatting for the CLI.

use crate::models::{AuthorProfile, CitationResult, ScholarResult};

const RULE: &str = "======================================================================";

/// Format a paper search result for terminal output.
#[must_use]
pub fn format_search_text(result: &ScholarResult) -> String {
    if result.papers.is_empty() {
        return format!("No papers found for: {}\n", result.query);
    }

    let mut output = format!("\nFound {} papers for: {}\n{RULE}\n", result.papers.len(), result.query);

    for (i, paper) in result.papers.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", i + 1, paper.title));
        if !paper.authors.is_empty() {
            output.push_str(&format!("   Authors: {}\n", paper.author_names()));
        }
        match paper.year {
            Some(year) => output.push_str(&format!("   Venue: {} ({year})\n", paper.venue)),
            None => output.push_str(&format!("   Venue: {}\n", paper.venue)),
        }
        output.push_str(&format!("   Citations: {}\n", paper.citations));
        if let Some(url) = &paper.url {
            output.push_str(&format!("   URL: {url}\n"));
        }
        if let Some(pdf_url) = &paper.pdf_url {
            output.push_str(&format!("   PDF: {pdf_url}\n"));
        }
    }

    output
}

/// Format author search matches for terminal output.
#[must_use]
pub fn format_author_matches_text(name: &str, profiles: &[AuthorProfile]) -> String {
    if profiles.is_empty() {
        return format!("No authors found matching: {name}\n");
    }

    let mut output = format!("\nAuthors matching: {name}\n{RULE}\n");

    for profile in profiles {
        output.push_str(&format!("\nName: {}\n", profile.name));
        if let Some(id) = &profile.author_id {
            output.push_str(&format!("  ID: {id}\n"));
        }
        if let Some(affiliation) = &profile.affiliation {
            output.push_str(&format!("  Affiliation: {affiliation}\n"));
        }
        if let Some(citations) = profile.total_citations {
            output.push_str(&format!("  Citations: {citations}\n"));
        }
        if !profile.interests.is_empty() {
            let interests: Vec<&str> =
                profile.interests.iter().take(5).map(String::as_str).collect();
            output.push_str(&format!("  Interests: {}\n", interests.join(", ")));
        }
    }

    output
}

/// Format a full author profile for terminal output.
#[must_use]
pub fn format_profile_text(profile: &AuthorProfile) -> String {
    let mut output = format!("\n{}\n{RULE}\n", profile.name);

    if let Some(affiliation) = &profile.affiliation {
        output.push_str(&format!("Affiliation: {affiliation}\n"));
    }
    if let Some(citations) = profile.total_citations {
        output.push_str(&format!("Total Citations: {citations}\n"));
    }
    if let Some(h_index) = profile.h_index {
        output.push_str(&format!("h-index: {h_index}\n"));
    }
    if let Some(i10_index) = profile.i10_index {
        output.push_str(&format!("i10-index: {i10_index}\n"));
    }
    if !profile.interests.is_empty() {
        let interests: Vec<&str> = profile.interests.iter().take(5).map(String::as_str).collect();
        output.push_str(&format!("Interests: {}\n", interests.join(", ")));
    }

    if !profile.papers.is_empty() {
        output.push_str("\nTop Publications:\n");
        for paper in profile.papers.iter().take(10) {
            let year = paper.year.map_or_else(|| "n.d.".to_string(), |y| y.to_string());
            output.push_str(&format!(
                "  - {} ({year}) - {} citations\n",
                paper.title, paper.citations
            ));
        }
    }

    output
}

/// Format a citation lookup for terminal output.
#[must_use]
pub fn format_citations_text(result: &CitationResult) -> String {
    if result.citing_papers.is_empty() {
        return format!("No citing papers found for: {}\n", result.citation_id);
    }

    let mut output = format!("\nPapers citing: {}\n{RULE}\n", result.citation_id);

    for (i, paper) in result.citing_papers.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", i + 1, paper.title));
        if !paper.authors.is_empty() {
            output.push_str(&format!("   Authors: {}\n", paper.author_names()));
        }
        match paper.year {
            Some(year) => output.push_str(&format!("   Venue: {} ({year})\n", paper.venue)),
            None if !paper.venue.is_empty() => {
                output.push_str(&format!("   Venue: {}\n", paper.venue));
            }
            None => {}
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;

    fn sample_result() -> ScholarResult {
        ScholarResult {
            query: "transformers".to_string(),
            papers: vec![Paper {
                title: "Attention Is All You Need".to_string(),
                authors: vec!["A Vaswani".to_string(), "N Shazeer".to_string()],
                venue: "NeurIPS".to_string(),
                year: Some(2017),
                citations: 100_000,
                url: Some("https://example.org".to_string()),
                ..Paper::default()
            }],
            total_results: Some(1),
        }
    }

    #[test]
    fn test_search_text_includes_fields() {
        let text = format_search_text(&sample_result());
        assert!(text.contains("Attention Is All You Need"));
        assert!(text.contains("A Vaswani, N Shazeer"));
        assert!(text.contains("NeurIPS (2017)"));
        assert!(text.contains("Citations: 100000"));
    }

    #[test]
    fn test_empty_search_text() {
        let result = ScholarResult {
            query: "nothing".to_string(),
            papers: Vec::new(),
            total_results: None,
        };
        assert!(format_search_text(&result).contains("No papers found"));
    }

    #[test]
    fn test_profile_text_includes_metrics() {
        let profile = AuthorProfile {
            name: "Geoffrey Hinton".to_string(),
            affiliation: Some("University of Toronto".to_string()),
            total_citations: Some(700_000),
            h_index: Some(186),
            ..AuthorProfile::default()
        };
        let text = format_profile_text(&profile);
        assert!(text.contains("Geoffrey Hinton"));
        assert!(text.contains("h-index: 186"));
        assert!(text.contains("Total Citations: 700000"));
    }
}
