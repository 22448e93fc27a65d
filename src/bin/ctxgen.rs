//! ctxgen - push located-at context assertions to a hub
//!
//! Usage:
//!   ctxgen config.json
//!
//! Logs go to stderr; set CTXGEN_LOG_DIR to also write daily log files.

use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(
    name = "ctxgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate context assertion graphs and push them to a hub"
)]
struct Cli {
    /// Path to the JSON configuration file
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logs = ctxgen::LogContext::init()?;

    let cancel = CancellationToken::new();
    ctxgen::cancel_on_ctrl_c(cancel.clone());

    let result = ctxgen::run(&cli.config, cancel).await;
    drop(logs);
    result.map(|_| ())
}
