//! Hokusai command-line interface.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    cli::run(cli)
}
