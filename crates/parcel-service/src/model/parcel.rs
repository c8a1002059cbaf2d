//! Parcels, their identifiers and registration payloads.
//!
//! # Actor Framework
//! [`Parcel`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Parcel`](#impl-ActorEntity-for-Parcel) for details on:
//! - Creation parameters ([`ParcelCreate`](crate::model::ParcelCreate))
//! - Lifecycle actions ([`ParcelAction`](crate::parcel_actor::actions::ParcelAction))

use super::event::{EventKind, ParcelEvent};
use super::route::{LegId, Route};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Display;
use uuid::Uuid;

/// Pickup identifier: 64 lowercase hex characters.
///
/// Doubles as the public tracking token and the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParcelId(String);

impl ParcelId {
    /// SHA-256 of a fresh random UUID, hex encoded.
    pub fn generate() -> Self {
        let token = Uuid::new_v4().to_string();
        Self(hex::encode(Sha256::digest(token.as_bytes())))
    }

    /// Normalises a caller-supplied identifier so lookups ignore hex case.
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParcelId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Display for ParcelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

/// A declared item inside a parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone)]
pub struct Parcel {
    pub id: ParcelId,
    pub origin: String,
    pub destination: String,
    pub dimensions: Dimensions,
    pub weight: f64,
    pub items: Vec<Item>,
    pub route: Route,
    /// Index into `route.legs` of the next leg to take; equals the leg count once every
    /// leg has departed.
    pub next_leg_index: usize,
    /// Append-only, never empty.
    pub history: Vec<ParcelEvent>,
}

impl Parcel {
    /// Builds a freshly registered parcel: no legs taken, history holding the
    /// registration event.
    pub fn new(id: ParcelId, params: ParcelCreate, route: Route) -> Self {
        let registered = ParcelEvent::now(EventKind::Registered {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
        });
        Self {
            id,
            origin: params.origin,
            destination: params.destination,
            dimensions: params.dimensions,
            weight: params.weight,
            items: params.items,
            route,
            next_leg_index: 0,
            history: vec![registered],
        }
    }

    /// The leg the parcel must depart on next, if any remain.
    pub fn next_leg(&self) -> Option<&LegId> {
        self.route.legs.get(self.next_leg_index)
    }

    pub fn legs_remaining(&self) -> usize {
        self.route.leg_count().saturating_sub(self.next_leg_index)
    }

    pub fn last_event(&self) -> Option<&ParcelEvent> {
        self.history.last()
    }
}

/// Registration payload.
#[derive(Debug, Clone)]
pub struct ParcelCreate {
    pub origin: String,
    pub destination: String,
    pub dimensions: Dimensions,
    pub weight: f64,
    pub items: Vec<Item>,
}

impl ParcelCreate {
    /// Sum of the declared item values.
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value).sum()
    }
}
