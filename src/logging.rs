//! Process logging context
//!
//! Created by the binary before the scheduler starts and dropped after it
//! stops. Dropping flushes the file writer, if one was configured.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "ctxgen=info,ctxgen_core=info,ctxgen_push=info,ctxgen_stream=info,ctxgen_callback=info,tower_http=info";

/// Directory for daily-rolling log files, in addition to stderr.
pub const LOG_DIR_ENV: &str = "CTXGEN_LOG_DIR";

pub struct LogContext {
    log_dir: Option<PathBuf>,
    _guard: Option<WorkerGuard>,
}

impl LogContext {
    /// Installs the global subscriber: `RUST_LOG` (or [`DEFAULT_FILTER`]),
    /// stderr output, and a file layer when `CTXGEN_LOG_DIR` is set.
    pub fn init() -> anyhow::Result<Self> {
        let log_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from);
        Self::init_with(log_dir)
    }

    pub fn init_with(log_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let (file_layer, guard) = match &log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let appender = tracing_appender::rolling::daily(dir, "ctxgen.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(file_layer)
            .try_init()?;

        Ok(Self {
            log_dir,
            _guard: guard,
        })
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir.as_ref()
    }
}
