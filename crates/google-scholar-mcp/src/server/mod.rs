//! MCP server implementation.
//!
//! Stdio transport only (Claude Desktop). The server owns the tool
//! registry and execution context; every `tools/call` routes through
//! [`ToolRegistry::execute_tool`].

pub mod rpc;
pub mod stdio;

use std::sync::Arc;

use crate::client::ScholarClient;
use crate::tools::{ToolContext, ToolRegistry};

/// MCP server for Google Scholar.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server.
    #[must_use]
    pub fn new(client: ScholarClient) -> Self {
        let ctx = ToolContext::new(Arc::new(client));
        let registry = ToolRegistry::new();

        Self { ctx, registry }
    }

    /// Run the server in stdio mode (for Claude Desktop).
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.registry.tools().len());

        stdio::run_stdio(self.registry, self.ctx).await
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.registry.tools().iter().map(|t| (t.name(), t.description())).collect()
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.registry.tools().len()).finish()
    }
}
