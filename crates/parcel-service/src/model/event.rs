//! Timestamped events making up a parcel's history.

use super::route::LegId;
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// What happened to a parcel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Registered { origin: String, destination: String },
    Departed(LegId),
    Arrived(String),
    PickedUp,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Registered {
                origin,
                destination,
            } => write!(
                f,
                "Parcel registered for delivery from {} to {}",
                origin, destination
            ),
            EventKind::Departed(leg) => write!(f, "Departed on leg {}", leg),
            EventKind::Arrived(location) => write!(f, "Arrived at {}", location),
            EventKind::PickedUp => f.write_str("Parcel picked up at final destination"),
        }
    }
}

/// An immutable history entry. The message is derived from the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind,
}

impl ParcelEvent {
    /// Stamps `kind` with the current time.
    pub fn now(kind: EventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Unix epoch seconds, as rendered on the wire.
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}
