//! Google Scholar MCP Server
//!
//! A Model Context Protocol (MCP) server and LLM tool-calling adapter layer
//! for Google Scholar, backed by the SerpAPI Google Scholar engines.
//!
//! # Features
//!
//! - **4 MCP tools**: paper search, author search, author profiles, citation lookup
//! - **3 schema adapters**: OpenAI function calling, Anthropic tool use, and a
//!   generic prompt-JSON convention for local models (Ollama)
//! - **Single-call contract**: one HTTP request per tool invocation, no retry,
//!   no caching; callers decide whether to retry
//!
//! # Example
//!
//! ```no_run
//! use google_scholar_mcp::{ScholarClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ScholarClient::new(config)?;
//!
//!     let result = client.search_scholar("retrieval augmented generation", None, None, 5).await?;
//!     for paper in &result.papers {
//!         println!("{} ({} citations)", paper.title, paper.citations);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ScholarClient;
pub use config::Config;
pub use error::{ClientError, ConfigError, ToolError};
