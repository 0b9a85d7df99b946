//! The four Google Scholar tools: search_scholar, search_author,
//! get_author_profile, get_paper_citations.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::{
    AuthorProfileInput, PaperCitationsInput, SearchAuthorInput, SearchScholarInput,
};

/// Paper search tool.
pub struct SearchScholarTool;

#[async_trait::async_trait]
impl McpTool for SearchScholarTool {
    fn name(&self) -> &'static str {
        "search_scholar"
    }

    fn description(&self) -> &'static str {
        "Search Google Scholar for academic literature across all publication types: \
         journal articles, conference proceedings, preprints (arXiv, bioRxiv, SSRN), \
         technical reports, theses, and books. Add 'arxiv' or a conference name to \
         the query to narrow the publication type."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'retrieval augmented generation')"
                },
                "year_from": {
                    "type": "integer",
                    "description": "Filter papers published from this year (inclusive)"
                },
                "year_to": {
                    "type": "integer",
                    "description": "Filter papers published until this year (inclusive)"
                },
                "num_results": {
                    "type": "integer",
                    "default": 10,
                    "description": "Maximum number of results to return (1-20)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: SearchScholarInput = serde_json::from_value(input)?;

        let result = ctx
            .client
            .search_scholar(&params.query, params.year_from, params.year_to, params.num_results)
            .await?;

        Ok(serde_json::to_value(result)?)
    }
}

/// Author search tool.
pub struct SearchAuthorTool;

#[async_trait::async_trait]
impl McpTool for SearchAuthorTool {
    fn name(&self) -> &'static str {
        "search_author"
    }

    fn description(&self) -> &'static str {
        "Search Google Scholar for authors by name. Returns candidate profiles with \
         their author ids, which can be passed to get_author_profile."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Author name (e.g., 'Geoffrey Hinton')"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: SearchAuthorInput = serde_json::from_value(input)?;

        let profiles = ctx.client.search_author(&params.name).await?;

        Ok(json!({
            "name": params.name,
            "matching_authors": profiles,
        }))
    }
}

/// Author profile tool.
pub struct AuthorProfileTool;

#[async_trait::async_trait]
impl McpTool for AuthorProfileTool {
    fn name(&self) -> &'static str {
        "get_author_profile"
    }

    fn description(&self) -> &'static str {
        "Get an author's Google Scholar profile by author id, including affiliation, \
         citation metrics (h-index, i10-index), and their top publications."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "author_id": {
                    "type": "string",
                    "description": "Google Scholar author id (e.g., 'JicYPdAAAAAJ')"
                }
            },
            "required": ["author_id"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: AuthorProfileInput = serde_json::from_value(input)?;

        let profile = ctx.client.get_author_profile(&params.author_id).await?;

        Ok(serde_json::to_value(profile)?)
    }
}

/// Citation lookup tool.
pub struct PaperCitationsTool;

#[async_trait::async_trait]
impl McpTool for PaperCitationsTool {
    fn name(&self) -> &'static str {
        "get_paper_citations"
    }

    fn description(&self) -> &'static str {
        "List papers that cite a given paper, using the citation_id returned by a \
         previous search_scholar call."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "citation_id": {
                    "type": "string",
                    "description": "Citation id from a search result (e.g., '1234567890')"
                },
                "num_results": {
                    "type": "integer",
                    "default": 10,
                    "description": "Maximum number of citing papers to return (1-20)"
                }
            },
            "required": ["citation_id"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: PaperCitationsInput = serde_json::from_value(input)?;

        let result = ctx
            .client
            .get_paper_citations(&params.citation_id, params.num_results)
            .await?;

        Ok(serde_json::to_value(result)?)
    }
}
