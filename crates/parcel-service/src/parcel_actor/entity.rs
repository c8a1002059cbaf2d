//! ActorEntity implementation for the Parcel domain type.
//!
//! Every lifecycle rule lives here: registration against a resolved route, the leg
//! sequencing check, and the events each operation appends. The actor runs these hooks
//! on a staged copy, so a rejected operation never touches the stored parcel.

use super::actions::{ParcelAction, ParcelActionResult};
use super::error::ParcelError;
use super::state;
use crate::model::{EventKind, LegId, Parcel, ParcelCreate, ParcelEvent, ParcelId};
use crate::routing::RouteProvider;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Parcel {
    type Id = ParcelId;
    type Create = ParcelCreate;
    type Action = ParcelAction;
    type ActionResult = ParcelActionResult;
    type IndexKey = LegId;
    type Context = Arc<dyn RouteProvider>;
    type Error = ParcelError;

    /// Resolves the route, prices it for this parcel and registers it at its first leg.
    async fn from_create_params(
        id: ParcelId,
        params: ParcelCreate,
        routes: &Self::Context,
    ) -> Result<Self, Self::Error> {
        let route = routes
            .resolve_route(&params.origin, &params.destination)
            .await
            .ok_or_else(|| ParcelError::RouteNotFound {
                origin: params.origin.clone(),
                destination: params.destination.clone(),
            })?
            .quoted(params.weight, params.total_value());
        debug!(%id, legs = route.leg_count(), cost = route.cost, "Route resolved");
        Ok(Parcel::new(id, params, route))
    }

    /// Handles lifecycle actions.
    ///
    /// # Actions
    /// - `Pickup`: appends PickedUp
    /// - `Track`: arrival count and rendered history
    /// - `TakeLeg`: checks the leg against the route, appends Departed and advances
    /// - `PutAtLocation`: appends Arrived
    /// - `Status`: derived state and progress
    async fn handle_action(
        &mut self,
        action: ParcelAction,
        _routes: &Self::Context,
    ) -> Result<ParcelActionResult, Self::Error> {
        match action {
            ParcelAction::Pickup => {
                self.history.push(ParcelEvent::now(EventKind::PickedUp));
                Ok(ParcelActionResult::Pickup(()))
            }
            ParcelAction::Track => Ok(ParcelActionResult::Track(state::tracking_report(self))),
            ParcelAction::TakeLeg(leg) => {
                let expected = self.next_leg().cloned();
                if expected.as_ref() != Some(&leg) {
                    return Err(ParcelError::LegMismatch { leg, expected });
                }
                self.history.push(ParcelEvent::now(EventKind::Departed(leg)));
                self.next_leg_index += 1;
                Ok(ParcelActionResult::TakeLeg(()))
            }
            ParcelAction::PutAtLocation(location) => {
                self.history
                    .push(ParcelEvent::now(EventKind::Arrived(location)));
                Ok(ParcelActionResult::PutAtLocation(()))
            }
            ParcelAction::Status => Ok(ParcelActionResult::Status(state::status_report(self))),
        }
    }

    /// Parcels are filed under the leg they are waiting for.
    fn index_key(&self) -> Option<LegId> {
        state::awaiting_leg(self)
    }
}
