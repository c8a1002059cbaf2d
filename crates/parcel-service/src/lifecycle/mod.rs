//! # System Lifecycle & Orchestration
//!
//! Starts the parcel registry with its route provider injected, and tears it down again.
//!
//! ## Startup
//!
//! 1. **Actor Creation** - [`parcel_actor::new`](crate::parcel_actor::new) builds the actor and its client.
//! 2. **Dependency Injection** - the route provider is handed to `run()` as the actor context.
//! 3. **Spawn** - the actor loop runs in its own Tokio task.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - [`ParcelSystem::shutdown`] joins the actor task
//!
//! Clones of the client held elsewhere (e.g. HTTP handler state) keep the mailbox open, so
//! they must be dropped before `shutdown` can complete.

pub mod parcel_system;

pub use parcel_system::*;
