//! MCP server routing `tools/list` and `tools/call` to a [`ToolBox`].
//!
//! Framing, the initialize handshake, `ping` and protocol errors are handled
//! by `rmcp`; this module only maps tools in and results out.

use crate::tools::{ToolBox, ToolDefinition, ToolOutput, tool_definitions};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, JsonObject, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};

/// Name reported in the initialize handshake.
pub const SERVER_NAME: &str = "uigen-server";

const INSTRUCTIONS: &str = "Generates component markup, forms, layouts and theme setup \
                            from a registry of component descriptors.";

/// Errors ending a served session.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The client never completed the initialize handshake.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),
    /// The session task stopped abnormally.
    #[error("MCP session failed: {0}")]
    Session(String),
}

fn to_tool(definition: ToolDefinition) -> Tool {
    let schema: JsonObject = match definition.input_schema {
        JsonValue::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool::new(definition.name, definition.description, schema)
}

fn to_call_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Tool server backed by a shared, read-only [`ToolBox`].
#[derive(Debug, Clone)]
pub struct UiServer {
    toolbox: Arc<ToolBox>,
}

impl UiServer {
    /// Wraps a tool box.
    pub fn new(toolbox: ToolBox) -> Self {
        Self {
            toolbox: Arc::new(toolbox),
        }
    }

    /// The tool box answering calls.
    pub fn toolbox(&self) -> &ToolBox {
        &self.toolbox
    }

    /// Tools as listed to clients, in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        tool_definitions().into_iter().map(to_tool).collect()
    }

    /// Serves one session over a reader/writer pair until the client
    /// disconnects.
    pub async fn serve_io<R, W>(self, reader: R, writer: W) -> Result<(), ServeError>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let service = self
            .serve((reader, writer))
            .await
            .map_err(|err| ServeError::Handshake(err.to_string()))?;
        let reason = service
            .waiting()
            .await
            .map_err(|err| ServeError::Session(err.to_string()))?;
        log::info!("Session ended: {reason:?}");
        Ok(())
    }
}

impl ServerHandler for UiServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.to_string();
        let arguments = request.arguments.map(JsonValue::Object);
        let toolbox = Arc::clone(&self.toolbox);

        // Batch generation fans out on rayon; keep it off the async workers.
        let output = tokio::task::spawn_blocking(move || toolbox.call_text(&name, arguments))
            .await
            .map_err(|err| McpError::internal_error(err.to_string(), None))?;
        Ok(to_call_result(output))
    }
}
