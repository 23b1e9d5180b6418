//! Einstiegspunkt der Garantie-Brücke

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use garantie_bridge::config::{BridgeConfig, UPSTREAM_URL_VAR};
use garantie_bridge::relay::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BridgeConfig::from_env();
    if config.upstream_url.is_none() {
        warn!("{UPSTREAM_URL_VAR} ist nicht gesetzt; Einreichungen werden mit 503 beantwortet");
    }

    let bind_addr = config.bind_addr.clone();
    let app = router(AppState::new(config));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Garantie-Brücke gestartet");
    axum::serve(listener, app).await?;
    Ok(())
}
