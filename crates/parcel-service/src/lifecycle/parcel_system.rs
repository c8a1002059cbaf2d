use crate::clients::ParcelClient;
use crate::routing::RouteProvider;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the parcel registry.
///
/// # Example
///
/// ```ignore
/// let system = ParcelSystem::new(Arc::new(StaticRouteTable::default()), 32);
/// let receipt = system.parcel_client.register(params).await?;
/// system.shutdown().await?;
/// ```
pub struct ParcelSystem {
    /// Client for interacting with the Parcel actor
    pub parcel_client: ParcelClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ParcelSystem {
    /// Spawns the registry actor with `routes` as its context.
    ///
    /// `mailbox_capacity` must be greater than zero.
    pub fn new(routes: Arc<dyn RouteProvider>, mailbox_capacity: usize) -> Self {
        let (parcel_actor, generic_client) = crate::parcel_actor::new(mailbox_capacity);
        let handle = tokio::spawn(parcel_actor.run(routes));
        info!(mailbox_capacity, "Parcel system started");

        Self {
            parcel_client: ParcelClient::new(generic_client),
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to drain and exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down parcel system...");
        drop(self.parcel_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Parcel system shutdown complete.");
        Ok(())
    }
}
