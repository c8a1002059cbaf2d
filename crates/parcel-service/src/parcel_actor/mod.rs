//! # Parcel Actor
//!
//! The parcel registry: one [`ResourceActor`] owning every [`Parcel`] and the awaiting-leg
//! index.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Parcel`]
//! - [`error`] - [`ParcelError`] type for type-safe error handling
//! - [`actions`] - [`ParcelAction`] and [`ParcelActionResult`]
//! - [`state`] - derived state, tracking and status reports
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use parcel_service::clients::ParcelClient;
//! use parcel_service::model::{Dimensions, ParcelCreate};
//! use parcel_service::parcel_actor;
//! use parcel_service::routing::{RouteProvider, StaticRouteTable};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = parcel_actor::new(16);
//!     let client = ParcelClient::new(generic_client);
//!
//!     let routes: Arc<dyn RouteProvider> = Arc::new(StaticRouteTable::default());
//!     tokio::spawn(actor.run(routes));
//!
//!     let receipt = client
//!         .register(ParcelCreate {
//!             origin: "CityA".to_string(),
//!             destination: "CityB".to_string(),
//!             dimensions: Dimensions { width: 10, height: 10, length: 10 },
//!             weight: 1.0,
//!             items: Vec::new(),
//!         })
//!         .await?;
//!
//!     client.take_leg(receipt.parcel_id, "leg-001".into()).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::{ParcelState, StatusReport, TrackingReport};

use crate::model::{Parcel, ParcelId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Parcel actor and its client.
///
/// `capacity` bounds the mailbox; senders wait while it is full.
pub fn new(capacity: usize) -> (ResourceActor<Parcel>, ResourceClient<Parcel>) {
    ResourceActor::new(capacity, ParcelId::generate)
}
