//! Anthropic tool-use adapter.

use serde_json::json;

use super::{SchemaAdapter, ToolCall};
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolRegistry;

/// Adapter for the Anthropic tool-use convention.
///
/// Tools are declared as `{name, description, input_schema}` entries;
/// invocations arrive as `tool_use` content blocks with a structured
/// `input` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicAdapter;

impl SchemaAdapter for AnthropicAdapter {
    fn tool_list(&self, registry: &ToolRegistry) -> serde_json::Value {
        let tools: Vec<serde_json::Value> = registry
            .tools()
            .iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "input_schema": t.input_schema(),
                })
            })
            .collect();

        serde_json::Value::Array(tools)
    }

    fn parse_call(&self, payload: &serde_json::Value) -> ToolResult<ToolCall> {
        let name = payload
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| ToolError::invalid_argument("name", "missing or not a string"))?;

        let arguments = match payload.get("input") {
            Some(serde_json::Value::Object(map)) => map.clone(),
            Some(serde_json::Value::Null) | None => serde_json::Map::new(),
            Some(_) => {
                return Err(ToolError::invalid_argument("input", "must be a JSON object"));
            }
        };

        Ok(ToolCall::new(name, arguments))
    }
}
