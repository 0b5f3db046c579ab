//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes word ranking over the MCP protocol via stdio transport. The tools
//! delegate to `wordrank_core`, the same functions the CLI commands use.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use wordrank_core::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_TOP_K, ExclusionSet, rank_text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `rank_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RankWordsParams {
    /// The text to rank words in.
    pub text: String,
    /// Number of words to report. Defaults to the server's configured value.
    pub top: Option<usize>,
    /// Words to leave out. Replaces the server's exclusion list when given.
    pub exclusions: Option<Vec<String>>,
}

/// MCP server exposing word ranking to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    exclusions: Arc<ExclusionSet>,
    top_k: usize,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            ExclusionSet::default(),
            DEFAULT_TOP_K,
            Some(DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server that ranks with `exclusions` and reports `top_k` words
    /// unless a call says otherwise. Text longer than `max_input` bytes is
    /// rejected; `None` disables the check.
    pub fn new(exclusions: ExclusionSet, top_k: usize, max_input: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            exclusions: Arc::new(exclusions),
            top_k,
            max_input,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "top": self.top_k,
            "exclusions": self.exclusions.len(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Rank the most frequent words in text.
    #[tool(
        description = "Rank the most frequent words in English text. Punctuation, digits, numbers below 100, and excluded words are not counted. Returns totals and ranked entries."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn rank_words(
        &self,
        Parameters(params): Parameters<RankWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        let top_k = params.top.unwrap_or(self.top_k);
        tracing::debug!(tool = "rank_words", top_k, "executing MCP tool");

        if let Some(max) = self.max_input
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: text is {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let report = match params.exclusions {
            Some(words) => {
                let exclusions: ExclusionSet = words.into_iter().collect();
                rank_text(&params.text, &exclusions, top_k)
            }
            None => rank_text(&params.text, &self.exclusions, top_k),
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "rank_words",
            total_words = report.total_words,
            entries = report.entries.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use rank_words to find the most frequent words in a text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
