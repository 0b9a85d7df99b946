//! Generic prompt-JSON adapter for models without native tool calling
//! (Ollama and similar local runtimes).
//!
//! The textual contract: the model is instructed to emit a JSON object with
//! a literal `"action"` field naming the tool. `parse_text` scans the model
//! output for the **first** well-formed JSON object carrying a string
//! `"action"` field and fails with `NoToolCallFound` if none exists. No
//! partial or multi-call parsing is attempted; trailing objects are
//! ignored. This matching rule is a documented contract, not best-effort
//! behavior.

use serde_json::json;

use super::{SchemaAdapter, ToolCall};
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolRegistry;

/// Adapter for the prompt-JSON convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAdapter;

impl PromptAdapter {
    /// Build the system prompt that teaches the model the tool contract.
    #[must_use]
    pub fn system_prompt(&self, registry: &ToolRegistry) -> String {
        let mut prompt = String::from(
            "You are a research assistant with access to Google Scholar.\n\n\
             To invoke a tool, output a JSON object with an \"action\" field naming \
             the tool and the tool's arguments as sibling fields, for example:\n\n\
             {\"action\": \"search\", \"query\": \"retrieval augmented generation\", \
             \"num_results\": 5}\n\n\
             Available actions:\n",
        );

        for tool in registry.tools() {
            prompt.push_str(&format!("- {}: {}\n", tool.name(), tool.description()));
        }

        prompt.push_str(
            "\nShort aliases are accepted: search, author, profile, citations.\n\
             Output at most one JSON object per reply.",
        );
        prompt
    }

    /// Scan free-form model output for a tool invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NoToolCallFound`] when no well-formed JSON
    /// object with a string `"action"` field appears in the output.
    pub fn parse_text(&self, output: &str) -> ToolResult<ToolCall> {
        for (idx, ch) in output.char_indices() {
            if ch != '{' {
                continue;
            }
            let Some(candidate) = balanced_object(&output[idx..]) else {
                continue;
            };
            let Ok(serde_json::Value::Object(map)) = serde_json::from_str(candidate) else {
                continue;
            };
            let Some(action) = map.get("action").and_then(|a| a.as_str()) else {
                continue;
            };

            // Unrecognized actions pass through and fail at dispatch
            // with UnknownTool.
            let name = canonical_tool_name(action).unwrap_or(action).to_string();
            let mut arguments = map.clone();
            arguments.remove("action");
            return Ok(ToolCall::new(name, arguments));
        }

        Err(ToolError::NoToolCallFound)
    }
}

impl SchemaAdapter for PromptAdapter {
    fn tool_list(&self, registry: &ToolRegistry) -> serde_json::Value {
        let tools: Vec<serde_json::Value> = registry
            .tools()
            .iter()
            .map(|t| {
                json!({
                    "action": t.name(),
                    "description": t.description(),
                    "parameters": t.input_schema(),
                })
            })
            .collect();

        serde_json::Value::Array(tools)
    }

    fn parse_call(&self, payload: &serde_json::Value) -> ToolResult<ToolCall> {
        match payload {
            serde_json::Value::String(text) => self.parse_text(text),
            serde_json::Value::Object(map) => {
                // Already-decoded payloads take the same action contract.
                let Some(action) = map.get("action").and_then(|a| a.as_str()) else {
                    return Err(ToolError::NoToolCallFound);
                };
                let name = canonical_tool_name(action).unwrap_or(action).to_string();
                let mut arguments = map.clone();
                arguments.remove("action");
                Ok(ToolCall::new(name, arguments))
            }
            _ => Err(ToolError::NoToolCallFound),
        }
    }
}

/// Map short action aliases to registry names. Full registry names map to
/// themselves; anything else is left for the dispatcher to reject.
fn canonical_tool_name(action: &str) -> Option<&'static str> {
    match action {
        "search" | "search_scholar" => Some("search_scholar"),
        "author" | "search_author" => Some("search_author"),
        "profile" | "get_author_profile" => Some("get_author_profile"),
        "citations" | "get_paper_citations" => Some("get_paper_citations"),
        _ => None,
    }
}

/// Extract a balanced `{...}` slice starting at the first character of
/// `text`, honoring JSON string literals and escapes. Returns `None` when
/// the braces never balance.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}
