//! Schema adapters for LLM tool-calling conventions.
//!
//! Each adapter is a stateless pair of translators: one projects the Tool
//! Registry's argument specs into the provider's declared tool format, the
//! other parses a provider-specific invocation payload back into a
//! [`ToolCall`]. The argument semantics are identical across providers;
//! only field names and nesting differ.

mod anthropic;
mod openai;
mod prompt;

pub use anthropic::AnthropicAdapter;
pub use openai::OpenAiAdapter;
pub use prompt::PromptAdapter;

use crate::error::ToolResult;
use crate::tools::ToolRegistry;

/// A parsed tool invocation.
///
/// Constructed per-invocation by a schema adapter, consumed exactly once by
/// the registry dispatcher, then discarded. Carries no identity beyond a
/// single request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    /// Registered tool name.
    pub name: String,

    /// Argument mapping, keys unique.
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolCall {
    /// Create a tool call.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { name: name.into(), arguments }
    }

    /// The arguments as a JSON object value, ready for registry dispatch.
    #[must_use]
    pub fn arguments_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.arguments.clone())
    }
}

/// Translator between the registry's provider-neutral schemas and one
/// provider's tool-calling wire format.
pub trait SchemaAdapter {
    /// Project the registry's tools into the provider's declared format.
    fn tool_list(&self, registry: &ToolRegistry) -> serde_json::Value;

    /// Parse a provider-specific invocation payload into a [`ToolCall`].
    ///
    /// # Errors
    ///
    /// Returns an error when the payload does not carry a parseable tool
    /// invocation.
    fn parse_call(&self, payload: &serde_json::Value) -> ToolResult<ToolCall>;
}
