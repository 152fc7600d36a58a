#![deny(missing_docs)]
//! uigen server: tool dispatch and an MCP stdio server for the uigen kit.

/// Parallel batch generation.
pub mod batch;
/// Command-line configuration.
pub mod config;
/// MCP server handler and session loop.
pub mod mcp;
/// Tool catalog and dispatch.
pub mod tools;
/// Tool argument shapes.
pub mod types;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats, generate_batch,
};
pub use config::Cli;
pub use mcp::{SERVER_NAME, ServeError, UiServer};
pub use tools::{ToolBox, ToolDefinition, ToolError, ToolOutput, tool_definitions};
