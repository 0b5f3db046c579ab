//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};
use wordrank_core::ExclusionSet;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve word ranking over MCP until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go to the log layers.
#[instrument(name = "cmd_serve", skip_all, fields(top_k = top_k))]
pub async fn cmd_serve(
    _args: ServeArgs,
    exclusions: ExclusionSet,
    top_k: usize,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    info!(
        top_k,
        exclusions = exclusions.len(),
        max_input = ?max_input,
        "starting MCP server on stdio"
    );

    let service = ProjectServer::new(exclusions, top_k, max_input)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;

    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
