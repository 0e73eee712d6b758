//! Calculator MCP Server - Main Entry Point
//!
//! This is the main entry point for the calculator MCP server application.
//! The actual implementation is in the `calc_mcp` library.

use anyhow::Result;
use calc_mcp::{CalcServerHandler, Config, NumberBase};
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Calculator MCP Server - multi-base keypad calculator via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (base, precision, grouping)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting number base: dec, bin or hex (overrides the config file)
    #[arg(long)]
    base: Option<NumberBase>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(base) = args.base {
        config.base = base;
    }

    let handler = CalcServerHandler::new(&config);
    serve_stdio(handler).await?;
    Ok(())
}
