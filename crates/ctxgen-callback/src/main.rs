//! ctxgen-callback - log every POST and echo it back
//!
//! Usage:
//!   ctxgen-callback                 → listen on 127.0.0.1:8081
//!   ctxgen-callback --port 9000     → listen on 127.0.0.1:9000

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "ctxgen-callback",
    version = env!("CARGO_PKG_VERSION"),
    about = "Echo server that logs and acknowledges every POST"
)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8081)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ctxgen_callback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    ctxgen_callback::serve(SocketAddr::new(cli.host, cli.port)).await
}
