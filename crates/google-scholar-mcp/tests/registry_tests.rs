//! Tool registry dispatch tests.
//!
//! Registry dispatch is a pure pass-through: `execute_tool` must produce
//! exactly what the equivalent direct client call produces.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use google_scholar_mcp::client::ScholarClient;
use google_scholar_mcp::config::Config;
use google_scholar_mcp::error::ToolError;
use google_scholar_mcp::tools::{ToolContext, ToolRegistry};

fn setup(mock_server: &MockServer) -> (ToolRegistry, ToolContext) {
    let config = Config::for_testing(&mock_server.uri());
    let client = ScholarClient::new(config).unwrap();
    (ToolRegistry::new(), ToolContext::new(Arc::new(client)))
}

async fn mount_search_fixture(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_scholar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_information": {"total_results": 2},
            "organic_results": [
                {
                    "title": "Paper One",
                    "link": "https://example.org/1",
                    "publication_info": {"summary": "A Author - Venue One, 2021"},
                    "inline_links": {"cited_by": {"total": 10, "cites_id": "1"}}
                },
                {
                    "title": "Paper Two",
                    "link": "https://example.org/2",
                    "publication_info": {"summary": "B Author - Venue Two, 2022"},
                    "inline_links": {"cited_by": {"total": 20, "cites_id": "2"}}
                }
            ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_unknown_tool_is_rejected() {
    let mock_server = MockServer::start().await;
    let (registry, ctx) = setup(&mock_server);

    let err = registry.execute_tool(&ctx, "nonexistent_tool", json!({})).await.unwrap_err();
    match err {
        ToolError::UnknownTool { name } => assert_eq!(name, "nonexistent_tool"),
        other => panic!("expected unknown tool, got {other}"),
    }
}

#[tokio::test]
async fn test_missing_required_argument_is_rejected_before_dispatch() {
    let mock_server = MockServer::start().await;
    let (registry, ctx) = setup(&mock_server);

    // No mock mounted: validation must fail before any HTTP call.
    let err = registry.execute_tool(&ctx, "search_scholar", json!({})).await.unwrap_err();
    match err {
        ToolError::InvalidArgument { field, .. } => assert_eq!(field, "query"),
        other => panic!("expected invalid argument, got {other}"),
    }
}

#[tokio::test]
async fn test_wrongly_typed_argument_is_rejected_before_dispatch() {
    let mock_server = MockServer::start().await;
    let (registry, ctx) = setup(&mock_server);

    let err = registry
        .execute_tool(&ctx, "search_scholar", json!({"query": "rust", "num_results": "five"}))
        .await
        .unwrap_err();
    match err {
        ToolError::InvalidArgument { field, message } => {
            assert_eq!(field, "num_results");
            assert!(message.contains("integer"));
        }
        other => panic!("expected invalid argument, got {other}"),
    }
}

#[tokio::test]
async fn test_registry_dispatch_matches_direct_client_call() {
    let mock_server = MockServer::start().await;
    mount_search_fixture(&mock_server).await;
    let (registry, ctx) = setup(&mock_server);

    let via_registry = registry
        .execute_tool(&ctx, "search_scholar", json!({"query": "rust", "num_results": 10}))
        .await
        .unwrap();

    let direct = ctx.client.search_scholar("rust", None, None, 10).await.unwrap();
    let direct_value = serde_json::to_value(direct).unwrap();

    assert_eq!(via_registry, direct_value);
    assert_eq!(via_registry["query"], "rust");
    assert_eq!(via_registry["papers"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_registry_surfaces_client_validation_errors() {
    let mock_server = MockServer::start().await;
    let (registry, ctx) = setup(&mock_server);

    let err = registry
        .execute_tool(
            &ctx,
            "search_scholar",
            json!({"query": "rust", "year_from": 2024, "year_to": 2020}),
        )
        .await
        .unwrap_err();

    assert!(err.to_user_message().contains("year_from"));
}

#[tokio::test]
async fn test_result_is_a_plain_json_mapping() {
    let mock_server = MockServer::start().await;
    mount_search_fixture(&mock_server).await;
    let (registry, ctx) = setup(&mock_server);

    let result = registry
        .execute_tool(&ctx, "search_scholar", json!({"query": "rust"}))
        .await
        .unwrap();

    // String keys, JSON-primitive or nested-mapping values only.
    let map = result.as_object().expect("result must be an object");
    assert!(map.contains_key("query"));
    assert!(map.contains_key("papers"));
    assert!(map["papers"].is_array());
}

#[tokio::test]
async fn test_citations_dispatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("cites", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [{"title": "Citing Paper"}]
        })))
        .mount(&mock_server)
        .await;

    let (registry, ctx) = setup(&mock_server);
    let result = registry
        .execute_tool(&ctx, "get_paper_citations", json!({"citation_id": "42"}))
        .await
        .unwrap();

    assert_eq!(result["citation_id"], "42");
    assert_eq!(result["citing_papers"][0]["title"], "Citing Paper");
}
