//! HTTP server for the investment calculator
//!
//! Usage: cargo run --bin server -- --bind 0.0.0.0:8787

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use property_returns::api::{self, AppState};
use property_returns::cli::DataArgs;

#[derive(Debug, Parser)]
#[command(name = "server")]
#[command(about = "Serve listings and investment projections over HTTP")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8787")]
    bind: SocketAddr,

    #[command(flatten)]
    data: DataArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = args.data.catalog().context("Failed to load listings")?;
    let calculator = args.data.calculator().context("Failed to load assumptions")?;

    api::serve(args.bind, AppState::new(catalog, calculator))
        .await
        .with_context(|| format!("Server on {} failed", args.bind))
}
