//! Property-based tests for the Paper model.

use google_scholar_mcp::models::Paper;
use proptest::prelude::*;

/// Generate arbitrary Paper structs for testing.
fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[A-Za-z0-9 ]{1,100}",                                        // title
        proptest::collection::vec("[A-Z] [A-Za-z]{2,20}", 0..6),      // authors
        "[A-Za-z0-9 ]{0,60}",                                         // venue
        proptest::option::of(1900i32..2030),                          // year
        0i64..10_000_000,                                             // citations
        proptest::option::of("[0-9]{5,20}"),                          // citation_id
    )
        .prop_map(|(title, authors, venue, year, citations, citation_id)| Paper {
            title,
            authors,
            venue,
            year,
            citations,
            citation_id,
            ..Paper::default()
        })
}

proptest! {
    /// Paper serialization roundtrip: serialize then deserialize should preserve data.
    #[test]
    fn paper_roundtrip(paper in arb_paper()) {
        let json = serde_json::to_value(&paper).expect("serialize");
        let decoded: Paper = serde_json::from_value(json).expect("deserialize");

        prop_assert_eq!(&paper.title, &decoded.title);
        prop_assert_eq!(&paper.authors, &decoded.authors);
        prop_assert_eq!(&paper.year, &decoded.year);
        prop_assert_eq!(&paper.citations, &decoded.citations);
    }

    /// Paper deserialization never panics on arbitrary JSON objects.
    #[test]
    fn paper_from_arbitrary_json_object_never_panics(
        title in proptest::option::of(".*"),
        year in proptest::option::of(any::<i32>()),
        citations in proptest::option::of(any::<i64>()),
    ) {
        let json = serde_json::json!({
            "title": title,
            "year": year,
            "citations": citations,
        });

        // Should not panic - may succeed or fail gracefully
        let _ = serde_json::from_value::<Paper>(json);
    }

    /// Paper handles extreme citation counts.
    #[test]
    fn paper_handles_extreme_citation_counts(citations in any::<i64>()) {
        let json = serde_json::json!({
            "title": "extreme test",
            "citations": citations,
        });

        let result = serde_json::from_value::<Paper>(json);
        prop_assert!(result.is_ok());
        prop_assert_eq!(result.unwrap().citations, citations);
    }

    /// author_names joins exactly the stored names.
    #[test]
    fn author_names_preserves_every_author(paper in arb_paper()) {
        let display = paper.author_names();
        for author in &paper.authors {
            prop_assert!(display.contains(author.as_str()));
        }
        if paper.authors.is_empty() {
            prop_assert!(display.is_empty());
        }
    }
}
