//! Wiring: config file → hub client → scheduler

use anyhow::Context;
use ctxgen_core::GeneratorConfig;
use ctxgen_push::HubClient;
use ctxgen_stream::{RunSummary, Scheduler};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Loads `config_path` and runs the generator until `cancel` fires.
///
/// Configuration problems fail before any network traffic.
pub async fn run(config_path: &Path, cancel: CancellationToken) -> anyhow::Result<RunSummary> {
    let config = match GeneratorConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e).with_context(|| format!("loading {}", config_path.display()));
        }
    };

    let publisher = Arc::new(HubClient::from_config(&config));
    let scheduler = Scheduler::new(config, publisher);
    let summary = scheduler.run(cancel).await?;
    Ok(summary)
}

/// Cancels `token` on the first Ctrl-C.
pub fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping after the current cycle");
                token.cancel();
            }
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
    });
}
