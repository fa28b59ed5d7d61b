mod cli;
mod telemetry;

use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use hashlink_core::{InMemoryStore, StoreSettings};
use hashlink_gateway::{App, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    telemetry::init(config.log_format);

    let settings = StoreSettings::builder()
        .prefix_len(usize::from(config.key_prefix_len))
        .capacity(config.store_capacity)
        .build();
    let store = InMemoryStore::with_settings(settings).context("failed to create store")?;
    let state = AppState::new(Arc::new(store), config.base_url.clone());

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %config.base_url,
        key_prefix_len = config.key_prefix_len,
        store_capacity = config.store_capacity,
        log_format = %config.log_format,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
