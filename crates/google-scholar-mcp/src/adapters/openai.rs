//! OpenAI function-calling adapter.

use serde_json::json;

use super::{SchemaAdapter, ToolCall};
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolRegistry;

/// Adapter for the OpenAI function-calling convention.
///
/// Tools are declared as `{"type": "function", "function": {...}}` entries;
/// invocations arrive with the arguments JSON-encoded as a string inside
/// `function.arguments`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiAdapter;

impl SchemaAdapter for OpenAiAdapter {
    fn tool_list(&self, registry: &ToolRegistry) -> serde_json::Value {
        let tools: Vec<serde_json::Value> = registry
            .tools()
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.input_schema(),
                    }
                })
            })
            .collect();

        serde_json::Value::Array(tools)
    }

    fn parse_call(&self, payload: &serde_json::Value) -> ToolResult<ToolCall> {
        let function = payload
            .get("function")
            .ok_or_else(|| ToolError::invalid_argument("function", "missing from payload"))?;

        let name = function
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| ToolError::invalid_argument("function.name", "missing or not a string"))?;

        // OpenAI serializes arguments as a JSON-encoded string.
        let arguments = match function.get("arguments") {
            Some(serde_json::Value::String(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str(raw)? {
                    serde_json::Value::Object(map) => map,
                    _ => {
                        return Err(ToolError::invalid_argument(
                            "function.arguments",
                            "must decode to a JSON object",
                        ));
                    }
                }
            }
            Some(serde_json::Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };

        Ok(ToolCall::new(name, arguments))
    }
}
