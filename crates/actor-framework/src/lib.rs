//! # Actor Framework
//!
//! Building blocks for type-safe, single-owner entity stores. Each resource type gets its own
//! [`ResourceActor`], a Tokio task that owns every instance of that type plus a secondary index,
//! and a cloneable [`ResourceClient`] that talks to it over channels.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain models and their transitions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, staging and indexing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! Business logic is written once in the entity; the actor handles message passing,
//! error wrapping and keeping the index in step with the store.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)]
//! struct Pallet {
//!     bay: String,
//! }
//!
//! #[derive(Debug)] struct PalletCreate { bay: String }
//! #[derive(Debug)] enum PalletAction { MoveTo(String) }
//! #[derive(Debug)] struct PalletError;
//!
//! impl std::fmt::Display for PalletError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "pallet error") }
//! }
//! impl std::error::Error for PalletError {}
//!
//! #[async_trait]
//! impl ActorEntity for Pallet {
//!     type Id = u32;
//!     type Create = PalletCreate;
//!     type Action = PalletAction;
//!     type ActionResult = ();
//!     type IndexKey = String;
//!     type Context = ();
//!     type Error = PalletError;
//!
//!     async fn from_create_params(_id: u32, params: PalletCreate, _ctx: &()) -> Result<Self, PalletError> {
//!         Ok(Self { bay: params.bay })
//!     }
//!
//!     async fn handle_action(&mut self, action: PalletAction, _ctx: &()) -> Result<(), PalletError> {
//!         match action {
//!             PalletAction::MoveTo(bay) => self.bay = bay,
//!         }
//!         Ok(())
//!     }
//!
//!     fn index_key(&self) -> Option<String> {
//!         Some(self.bay.clone())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = Arc::new(AtomicU32::new(1));
//!     let (actor, client) =
//!         ResourceActor::<Pallet>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(PalletCreate { bay: "north".into() }).await.unwrap();
//!     client.perform_action(id, PalletAction::MoveTo("south".into())).await.unwrap();
//!
//!     assert!(client.lookup("north".to_string()).await.unwrap().is_empty());
//!     assert_eq!(client.lookup("south".to_string()).await.unwrap(), vec![id]);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run()`, not to `new()`. An actor can therefore be handed
//! clients of other actors, or a shared service such as a route provider, after every
//! actor has been constructed.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes messages **sequentially**.
//! - The store is never shared, so no locks are needed around it.
//! - Actions are staged on a copy and committed only on success.
//! - The mailbox is bounded; senders wait when it is full.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` and channel helpers for unit-testing typed
//! client wrappers without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
