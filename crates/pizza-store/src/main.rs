use anyhow::Context;
use clap::Parser;
use pizza_store::api::{self, AppState};
use pizza_store::catalog::Catalog;
use pizza_store::config::Settings;
use pizza_store::lifecycle::{setup_tracing, StoreSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    setup_tracing();

    let catalog = match &settings.menu {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading menu from {}", path.display()))?,
        None => Catalog::pizzas(),
    };

    let system = StoreSystem::new(catalog, settings.store_buffer);
    let app = api::router(AppState::new(&system, settings.environment));

    let bind_address = settings.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    info!(
        address = %bind_address,
        environment = ?settings.environment,
        "Pizza Store API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
