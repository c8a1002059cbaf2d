//! Lifecycle actions for the Parcel actor.
//!
//! Each action is handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on a staged copy of the parcel; see [`super::entity`].

use super::state::{StatusReport, TrackingReport};
use crate::model::LegId;

/// Operations the registry performs on a single parcel.
#[derive(Debug, Clone)]
pub enum ParcelAction {
    /// Records collection at the final destination. No precondition is checked.
    Pickup,
    /// Reads the tracking report without modifying the parcel.
    Track,
    /// Records departure on a leg.
    ///
    /// # Errors
    /// Fails with `LegMismatch` unless the leg is the next one on the route.
    TakeLeg(LegId),
    /// Records arrival at a location. No precondition is checked.
    PutAtLocation(String),
    /// Reads the derived state.
    Status,
}

/// Results from ParcelActions - variants match 1:1 with ParcelAction
#[derive(Debug, Clone)]
pub enum ParcelActionResult {
    Pickup(()),
    Track(TrackingReport),
    TakeLeg(()),
    PutAtLocation(()),
    Status(StatusReport),
}
