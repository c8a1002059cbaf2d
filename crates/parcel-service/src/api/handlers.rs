//! HTTP handlers. Each one translates the wire shape, calls the [`ParcelClient`] and
//! renders the result; no lifecycle rule is checked here.

use super::dto::{
    DeliveryInfo, ParcelCreationInfo, ParcelList, ParcelStatus, ParcelStatusHistory,
    PickupInput, PutParcelInput, TakeParcelInput, TrackQuery,
};
use super::error::ApiError;
use super::AppState;
use crate::model::{LegId, ParcelId};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

/// `POST /register`: rejects negative weight, then quotes and registers the parcel.
pub async fn register(
    State(state): State<AppState>,
    Json(creation): Json<ParcelCreationInfo>,
) -> Result<Json<DeliveryInfo>, ApiError> {
    if !creation.weight.is_finite() || creation.weight < 0.0 {
        return Err(ApiError::BadRequest(
            "Weight must be a non-negative number".to_string(),
        ));
    }

    let receipt = state.parcels.register(creation.into()).await?;
    info!(parcel_id = %receipt.parcel_id, cost = receipt.cost, "Parcel registered");

    Ok(Json(DeliveryInfo {
        cost: receipt.cost,
        time: receipt.time,
        pickup_id_hash: receipt.parcel_id.to_string(),
    }))
}

/// `POST /pickup`
pub async fn pickup(
    State(state): State<AppState>,
    Json(input): Json<PickupInput>,
) -> Result<Json<bool>, ApiError> {
    state
        .parcels
        .pickup(ParcelId::parse(&input.pickup_id_hash))
        .await?;
    Ok(Json(true))
}

/// `GET /track?pickupIdHash=`: arrival count and rendered history.
pub async fn track(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<ParcelStatusHistory>, ApiError> {
    let report = state
        .parcels
        .track(ParcelId::parse(&query.pickup_id_hash))
        .await?;
    Ok(Json(report.into()))
}

/// `GET /parcels/:leg_id`: parcels waiting for the leg, in id order.
pub async fn parcels_for_leg(
    State(state): State<AppState>,
    Path(leg_id): Path<String>,
) -> Result<Json<ParcelList>, ApiError> {
    let ids = state.parcels.parcels_awaiting_leg(LegId(leg_id)).await?;
    Ok(Json(ParcelList {
        parcel_ids: ids.into_iter().map(|id| id.to_string()).collect(),
    }))
}

/// `POST /take/:parcel_id`: departs on the given leg if it is the next one.
pub async fn take(
    State(state): State<AppState>,
    Path(parcel_id): Path<String>,
    Json(input): Json<TakeParcelInput>,
) -> Result<Json<bool>, ApiError> {
    state
        .parcels
        .take_leg(ParcelId::parse(&parcel_id), LegId(input.leg_id))
        .await?;
    Ok(Json(true))
}

/// `POST /put/:parcel_id`
pub async fn put(
    State(state): State<AppState>,
    Path(parcel_id): Path<String>,
    Json(input): Json<PutParcelInput>,
) -> Result<Json<bool>, ApiError> {
    state
        .parcels
        .put_at_location(ParcelId::parse(&parcel_id), input.location)
        .await?;
    Ok(Json(true))
}

/// `GET /status/:parcel_id`: derived state and remaining legs.
pub async fn status(
    State(state): State<AppState>,
    Path(parcel_id): Path<String>,
) -> Result<Json<ParcelStatus>, ApiError> {
    let report = state.parcels.status(ParcelId::parse(&parcel_id)).await?;
    Ok(Json(report.into()))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
