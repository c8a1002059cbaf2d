//! # Route Resolution
//!
//! The registry asks a [`RouteProvider`] for a route when a parcel is registered and
//! never again. [`StaticRouteTable`] is the bundled implementation; anything that can
//! answer "which legs lead from A to B" (a remote router, a graph search) can stand in.

pub mod static_table;

pub use static_table::{RouteTableError, StaticRouteTable};

use crate::model::Route;
use async_trait::async_trait;

/// Resolves an origin/destination pair to a route.
///
/// Implementations must be deterministic for a given pair and free of side effects.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Returns `None` when no route connects the two locations.
    async fn resolve_route(&self, origin: &str, destination: &str) -> Option<Route>;
}
