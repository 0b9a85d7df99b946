//! Tool registry and the MCP tool trait.
//!
//! The registry is a fixed, immutable mapping from tool name to (argument
//! schema, handler). `execute_tool` validates arguments against the
//! declared schema before dispatch and returns the handler's result as a
//! plain JSON mapping, so every adapter can re-render it without the
//! original typed record.

mod scholar;

pub use scholar::{AuthorProfileTool, PaperCitationsTool, SearchAuthorTool, SearchScholarTool};

use std::sync::Arc;

use crate::client::ScholarClient;
use crate::error::{ToolError, ToolResult};

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ScholarClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ScholarClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_scholar").
    fn name(&self) -> &'static str;

    /// Tool description for LLMs.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with validated input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value>;
}

/// The fixed set of registered tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(SearchScholarTool),
        Box::new(SearchAuthorTool),
        Box::new(AuthorProfileTool),
        Box::new(PaperCitationsTool),
    ]
}

/// Immutable name-to-tool registry.
pub struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create the registry with the fixed tool set.
    #[must_use]
    pub fn new() -> Self {
        Self { tools: register_all_tools() }
    }

    /// Get a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// All registered tools, in registration order.
    #[must_use]
    pub fn tools(&self) -> &[Box<dyn McpTool>] {
        &self.tools
    }

    /// Look up, validate, and dispatch a tool call.
    ///
    /// # Errors
    ///
    /// `UnknownTool` on a lookup miss; `InvalidArgument` naming the first
    /// failing field when the arguments do not match the declared schema;
    /// otherwise whatever the handler returns.
    pub async fn execute_tool(
        &self,
        ctx: &ToolContext,
        name: &str,
        arguments: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let tool = self.get(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        validate_arguments(&tool.input_schema(), &arguments)?;
        tool.execute(ctx, arguments).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry").field("tools", &self.tools.len()).finish()
    }
}

/// Validate an argument mapping against a JSON-schema-shaped spec.
///
/// Checks that the input is an object, that every required property is
/// present, that every supplied property is declared, and that each value
/// matches its declared primitive type. The first failing field is
/// reported.
pub fn validate_arguments(
    schema: &serde_json::Value,
    arguments: &serde_json::Value,
) -> ToolResult<()> {
    let Some(args) = arguments.as_object() else {
        return Err(ToolError::invalid_argument("arguments", "must be a JSON object"));
    };

    let empty = serde_json::Map::new();
    let properties = schema
        .get("properties")
        .and_then(|p| p.as_object())
        .unwrap_or(&empty);

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !args.contains_key(field) {
                return Err(ToolError::invalid_argument(field, "required argument is missing"));
            }
        }
    }

    for (field, value) in args {
        let Some(spec) = properties.get(field) else {
            return Err(ToolError::invalid_argument(field, "unknown argument"));
        };

        let Some(expected) = spec.get("type").and_then(|t| t.as_str()) else {
            continue;
        };

        let ok = match expected {
            "string" => value.is_string(),
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            "object" => value.is_object(),
            "array" => value.is_array(),
            _ => true,
        };

        if !ok {
            return Err(ToolError::invalid_argument(
                field,
                format!("expected {expected}, got {}", json_type_name(value)),
            ));
        }
    }

    Ok(())
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
