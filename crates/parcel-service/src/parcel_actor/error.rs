//! Error types for the Parcel actor.

use crate::model::LegId;
use thiserror::Error;

/// Errors that can occur during parcel operations.
///
/// The first three are terminal domain outcomes; none of them leaves a partial change behind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParcelError {
    /// No route connects the requested origin and destination.
    #[error("No valid route found for the given origin and destination")]
    RouteNotFound { origin: String, destination: String },

    /// No parcel is registered under the identifier.
    #[error("Parcel not found")]
    ParcelNotFound(String),

    /// The leg is not the next one on the parcel's route, or every leg has been taken.
    #[error("Leg {leg} does not match the next expected leg for this parcel")]
    LegMismatch {
        leg: LegId,
        expected: Option<LegId>,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ParcelError {
    fn from(msg: String) -> Self {
        ParcelError::ActorCommunicationError(msg)
    }
}
