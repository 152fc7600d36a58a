use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uigen_server::{Cli, ToolBox, UiServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let registry = cli
        .build_registry()
        .context("failed to build component registry")?;
    log::info!(
        "uigen-server {} ready with {} components",
        env!("CARGO_PKG_VERSION"),
        registry.len()
    );

    let server = UiServer::new(ToolBox::new(registry, cli.package));
    server
        .serve_io(tokio::io::stdin(), tokio::io::stdout())
        .await
        .context("stdio session failed")?;

    log::info!("stdin closed, shutting down");
    Ok(())
}
