//! `javamap` CLI binary.
//!
//! Initializes logging via `tracing`, parses arguments with `clap`, and
//! runs the generate driver.

mod cli;
mod commands;
mod config_loader;
mod docker;
mod output;
mod syft;

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::parse();
    commands::dispatch(args).await
}
