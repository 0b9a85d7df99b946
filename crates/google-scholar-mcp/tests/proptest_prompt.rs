//! Property-based tests for the prompt-output tool-call extractor.

use google_scholar_mcp::adapters::PromptAdapter;
use proptest::prelude::*;

proptest! {
    /// The extractor never panics on arbitrary text.
    #[test]
    fn extractor_never_panics(text in ".*") {
        let _ = PromptAdapter.parse_text(&text);
    }

    /// A planted call object is always found, whatever brace-free prose
    /// surrounds it.
    #[test]
    fn planted_call_is_extracted(
        prefix in "[A-Za-z0-9 .,!?\n]{0,80}",
        suffix in ".*",
        query in "[A-Za-z0-9 ]{1,40}",
    ) {
        let text = format!(
            "{prefix}{{\"action\": \"search\", \"query\": {}}}{suffix}",
            serde_json::to_string(&query).unwrap(),
        );

        let call = PromptAdapter.parse_text(&text).expect("planted call not found");
        prop_assert_eq!(call.name, "search_scholar");
        prop_assert_eq!(call.arguments["query"].as_str().unwrap(), query.as_str());
        prop_assert!(!call.arguments.contains_key("action"));
    }

    /// Text without any braces never yields a call.
    #[test]
    fn brace_free_text_yields_nothing(text in "[^{}]*") {
        prop_assert!(PromptAdapter.parse_text(&text).is_err());
    }

    /// Braces inside a quoted argument never break extraction.
    #[test]
    fn braces_in_string_values_are_inert(inner in "[a-z{} ]{0,30}") {
        let text = format!(
            "{{\"action\": \"author\", \"name\": {}}}",
            serde_json::to_string(&inner).unwrap(),
        );

        let call = PromptAdapter.parse_text(&text).expect("call not found");
        prop_assert_eq!(call.name, "search_author");
        prop_assert_eq!(call.arguments["name"].as_str().unwrap(), inner.as_str());
    }
}
