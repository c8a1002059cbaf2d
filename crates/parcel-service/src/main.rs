//! # Parcel Service
//!
//! Registers parcels against fixed routes and tracks them leg by leg.
//!
//! ## Core Components
//!
//! - **[model](parcel_service::model)**: Pure data ([`Parcel`](parcel_service::model::Parcel), events, routes).
//! - **[routing](parcel_service::routing)**: The [`RouteProvider`](parcel_service::routing::RouteProvider) seam and the static table.
//! - **[parcel_actor](parcel_service::parcel_actor)**: The registry, one actor owning every parcel and the awaiting-leg index.
//! - **[clients](parcel_service::clients)**: [`ParcelClient`](parcel_service::clients::ParcelClient), the typed front of the actor.
//! - **[lifecycle](parcel_service::lifecycle)**: [`ParcelSystem`](parcel_service::lifecycle::ParcelSystem), which starts and stops the actor.
//! - **[api](parcel_service::api)**: axum router and handlers.
//!
//! ## Running
//!
//! ```bash
//! PARCEL_PORT=8000 RUST_LOG=info cargo run -p parcel-service
//! ```

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use parcel_service::api::{create_router, AppState};
use parcel_service::config::ServiceConfig;
use parcel_service::lifecycle::ParcelSystem;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env().context("invalid configuration")?;

    // Setup tracing once for the entire application
    setup_tracing("info");

    let routes = config.load_routes().context("failed to load route table")?;
    info!(routes = routes.len(), "Route table ready");

    let system = ParcelSystem::new(Arc::new(routes), config.mailbox_capacity);
    let app = create_router(AppState::new(system.parcel_client.clone()));

    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str())
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "Parcel service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Parcel service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
