//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{debug, info, instrument};

use lyricscore_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; no options yet
}

/// Serve the lyric session over MCP until the client disconnects.
///
/// Stdout carries the protocol, so all logging goes to stderr or the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    debug!(max_input_bytes = ?max_input_bytes, "executing serve command");

    let dictionary = config
        .reference_dictionary()
        .context("failed to load reference dictionary")?;
    let server = ProjectServer::new(config, dictionary, max_input_bytes);

    info!("MCP server listening on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start MCP server: {e}"))?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
