//! # HTTP API
//!
//! JSON over HTTP in front of the parcel registry.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/register` | [`handlers::register`] |
//! | POST | `/pickup` | [`handlers::pickup`] |
//! | GET | `/track?pickupIdHash=` | [`handlers::track`] |
//! | GET | `/parcels/:leg_id` | [`handlers::parcels_for_leg`] |
//! | POST | `/take/:parcel_id` | [`handlers::take`] |
//! | POST | `/put/:parcel_id` | [`handlers::put`] |
//! | GET | `/status/:parcel_id` | [`handlers::status`] |
//! | GET | `/health` | [`handlers::health`] |

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::ParcelClient;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared handler state. Cloned per request; the client inside is a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub parcels: ParcelClient,
}

impl AppState {
    pub fn new(parcels: ParcelClient) -> Self {
        Self { parcels }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/pickup", post(handlers::pickup))
        .route("/track", get(handlers::track))
        .route("/parcels/:leg_id", get(handlers::parcels_for_leg))
        .route("/take/:parcel_id", post(handlers::take))
        .route("/put/:parcel_id", post(handlers::put))
        .route("/status/:parcel_id", get(handlers::status))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
