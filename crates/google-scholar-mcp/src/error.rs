//! Error types for the Google Scholar MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Errors are always returned to the immediate caller;
//! nothing is retried or swallowed internally.

/// Errors from credential resolution.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No SerpAPI key was found through any channel.
    #[error(
        "SERPAPI_KEY is not configured; pass --api-key, set the environment \
         variable, or add it to a .env file (free keys at https://serpapi.com)"
    )]
    MissingKey,
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status, non-JSON body, missing top-level key, or a SerpAPI
    /// error field. Carries the status code and a body snippet so callers
    /// can decide whether a retry is worthwhile.
    #[error("upstream error (status {status}): {snippet}")]
    Upstream {
        /// HTTP status code of the response.
        status: u16,
        /// Truncated response body or provider error message.
        snippet: String,
    },

    /// A well-formed lookup yielded no entity.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// Caller-supplied argument failed validation.
    #[error("invalid argument '{field}': {message}")]
    InvalidArgument {
        /// Argument that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },
}

impl ClientError {
    /// Create an upstream error, truncating the body to a snippet.
    #[must_use]
    pub fn upstream(status: u16, body: &str) -> Self {
        let snippet: String = body.chars().take(200).collect();
        Self::Upstream { status, snippet }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument { field: field.into(), message: message.into() }
    }
}

/// Errors from tool dispatch and the schema adapters.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client.
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Registry lookup miss.
    #[error("unknown tool: {name}")]
    UnknownTool {
        /// The unregistered tool name.
        name: String,
    },

    /// Tool argument failed validation against the declared schema.
    #[error("invalid argument '{field}': {message}")]
    InvalidArgument {
        /// First field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// The prompt-based adapter could not locate a parseable tool
    /// invocation in the model output.
    #[error("no tool call found in model output")]
    NoToolCallFound,

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an unknown tool error.
    #[must_use]
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for tool-call responses.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Upstream { status, snippet }) => {
                format!("Google Scholar request failed (status {status}): {snippet}")
            }
            Self::Client(ClientError::NotFound { resource }) => {
                format!("Not found: {resource}. Please check the ID is correct.")
            }
            Self::InvalidArgument { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            Self::UnknownTool { name } => {
                format!("'{name}' is not a registered tool")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_truncates_body() {
        let body = "x".repeat(500);
        let err = ClientError::upstream(502, &body);
        match err {
            ClientError::Upstream { status, snippet } => {
                assert_eq!(status, 502);
                assert_eq!(snippet.len(), 200);
            }
            _ => panic!("expected upstream error"),
        }
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::invalid_argument("query", "cannot be empty");
        assert!(err.to_user_message().contains("query"));
        assert!(err.to_user_message().contains("cannot be empty"));

        let err = ToolError::unknown_tool("frobnicate");
        assert!(err.to_user_message().contains("frobnicate"));
    }

    #[test]
    fn test_client_error_wraps_into_tool_error() {
        let err: ToolError = ClientError::not_found("author xyz").into();
        assert!(err.to_user_message().contains("author xyz"));
    }
}
