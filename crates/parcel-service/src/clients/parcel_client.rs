//! # Parcel Client
//!
//! Provides a high‑level API for interacting with the `Parcel` actor.
//! It wraps a `ResourceClient<Parcel>` and exposes one method per registry operation.
//!
//! Domain errors raised inside the actor arrive boxed in
//! [`FrameworkError::EntityError`]; they are downcast back into [`ParcelError`] here so
//! callers can match on them.
use crate::model::{LegId, Parcel, ParcelCreate, ParcelId};
use crate::parcel_actor::{
    ParcelAction, ParcelActionResult, ParcelError, StatusReport, TrackingReport,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// What a successful registration hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub parcel_id: ParcelId,
    pub cost: u64,
    pub time: u64,
}

/// Client for interacting with the Parcel actor.
#[derive(Clone)]
pub struct ParcelClient {
    inner: ResourceClient<Parcel>,
}

impl ParcelClient {
    pub fn new(inner: ResourceClient<Parcel>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Parcel> for ParcelClient {
    type Error = ParcelError;

    fn inner(&self) -> &ResourceClient<Parcel> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ParcelError::ParcelNotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ParcelError>() {
                Ok(domain) => *domain,
                Err(other) => ParcelError::ActorCommunicationError(other.to_string()),
            },
            other => ParcelError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ParcelClient {
    /// Registers a parcel and quotes its route.
    ///
    /// Fails with `RouteNotFound` when the route provider knows no route; nothing is stored.
    #[instrument(skip(self, params), fields(origin = %params.origin, destination = %params.destination))]
    pub async fn register(&self, params: ParcelCreate) -> Result<RegistrationReceipt, ParcelError> {
        debug!("Sending request");
        let parcel_id = self.inner.create(params).await.map_err(Self::map_error)?;

        // Parcels are never removed, so the record is present and its route fixed.
        let parcel = self
            .inner
            .get(parcel_id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| ParcelError::ParcelNotFound(parcel_id.to_string()))?;

        Ok(RegistrationReceipt {
            parcel_id,
            cost: parcel.route.cost,
            time: parcel.route.time,
        })
    }

    /// Records collection of a parcel.
    #[instrument(skip(self))]
    pub async fn pickup(&self, id: ParcelId) -> Result<(), ParcelError> {
        debug!("Recording pickup");
        match self.act(id, ParcelAction::Pickup).await? {
            ParcelActionResult::Pickup(()) => Ok(()),
            _ => unreachable!("Pickup action must return Pickup result"),
        }
    }

    /// Returns the arrival count and the rendered history.
    #[instrument(skip(self))]
    pub async fn track(&self, id: ParcelId) -> Result<TrackingReport, ParcelError> {
        match self.act(id, ParcelAction::Track).await? {
            ParcelActionResult::Track(report) => Ok(report),
            _ => unreachable!("Track action must return Track result"),
        }
    }

    /// Records departure on `leg`.
    ///
    /// Fails with `LegMismatch` unless `leg` is the parcel's next leg.
    #[instrument(skip(self))]
    pub async fn take_leg(&self, id: ParcelId, leg: LegId) -> Result<(), ParcelError> {
        debug!("Recording departure");
        match self.act(id, ParcelAction::TakeLeg(leg)).await? {
            ParcelActionResult::TakeLeg(()) => Ok(()),
            _ => unreachable!("TakeLeg action must return TakeLeg result"),
        }
    }

    /// Records arrival at `location`.
    #[instrument(skip(self))]
    pub async fn put_at_location(&self, id: ParcelId, location: String) -> Result<(), ParcelError> {
        debug!("Recording arrival");
        match self.act(id, ParcelAction::PutAtLocation(location)).await? {
            ParcelActionResult::PutAtLocation(()) => Ok(()),
            _ => unreachable!("PutAtLocation action must return PutAtLocation result"),
        }
    }

    /// Derived state, next leg and legs remaining.
    #[instrument(skip(self))]
    pub async fn status(&self, id: ParcelId) -> Result<StatusReport, ParcelError> {
        match self.act(id, ParcelAction::Status).await? {
            ParcelActionResult::Status(report) => Ok(report),
            _ => unreachable!("Status action must return Status result"),
        }
    }

    /// Parcels waiting to depart on `leg`, in ascending identifier order.
    #[instrument(skip(self))]
    pub async fn parcels_awaiting_leg(&self, leg: LegId) -> Result<Vec<ParcelId>, ParcelError> {
        self.lookup(leg).await
    }

    /// Recomputes the awaiting-leg index; returns how many parcels it holds.
    #[instrument(skip(self))]
    pub async fn rebuild_index(&self) -> Result<usize, ParcelError> {
        self.inner.rebuild_index().await.map_err(Self::map_error)
    }

    async fn act(
        &self,
        id: ParcelId,
        action: ParcelAction,
    ) -> Result<ParcelActionResult, ParcelError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, Route};
    use crate::parcel_actor::ParcelState;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn sample_params() -> ParcelCreate {
        ParcelCreate {
            origin: "CityA".to_string(),
            destination: "CityC".to_string(),
            dimensions: Dimensions {
                width: 20,
                height: 10,
                length: 30,
            },
            weight: 4.5,
            items: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_route_quote() {
        let mut mock = MockClient::<Parcel>::new();
        let id = ParcelId::generate();
        let parcel = Parcel::new(
            id.clone(),
            sample_params(),
            Route::new(vec!["leg-003".into(), "leg-004".into()], 200, 120),
        );

        mock.expect_create().return_ok(id.clone());
        mock.expect_get(id.clone()).return_ok(Some(parcel));

        let client = ParcelClient::new(mock.client());
        let receipt = client.register(sample_params()).await.unwrap();

        assert_eq!(receipt.parcel_id, id);
        assert_eq!((receipt.cost, receipt.time), (200, 120));
        mock.verify();
    }

    #[tokio::test]
    async fn test_register_surfaces_route_not_found() {
        let mut mock = MockClient::<Parcel>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                ParcelError::RouteNotFound {
                    origin: "CityX".to_string(),
                    destination: "CityY".to_string(),
                },
            )));

        let client = ParcelClient::new(mock.client());
        let result = client.register(sample_params()).await;

        assert!(matches!(result, Err(ParcelError::RouteNotFound { .. })));
        mock.verify();
    }

    #[tokio::test]
    async fn test_take_leg_sends_leg_and_maps_mismatch() {
        let (client, mut receiver) = create_mock_client::<Parcel>(10);
        let parcel_client = ParcelClient::new(client);
        let id = ParcelId::generate();

        let task_id = id.clone();
        let take_task = tokio::spawn(async move {
            parcel_client
                .take_leg(task_id, LegId::from("leg-004"))
                .await
        });

        let (sent_id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(sent_id, id);
        match action {
            ParcelAction::TakeLeg(leg) => assert_eq!(leg, LegId::from("leg-004")),
            _ => panic!("Expected TakeLeg action"),
        }

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ParcelError::LegMismatch {
                    leg: LegId::from("leg-004"),
                    expected: Some(LegId::from("leg-003")),
                },
            ))))
            .unwrap();

        let result = take_task.await.unwrap();
        assert_eq!(
            result,
            Err(ParcelError::LegMismatch {
                leg: LegId::from("leg-004"),
                expected: Some(LegId::from("leg-003")),
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_parcel_maps_to_parcel_not_found() {
        let mut mock = MockClient::<Parcel>::new();
        let id = ParcelId::generate();
        mock.expect_action(id.clone())
            .return_err(FrameworkError::NotFound(id.to_string()));

        let client = ParcelClient::new(mock.client());
        let result = client.track(id.clone()).await;

        assert_eq!(result, Err(ParcelError::ParcelNotFound(id.to_string())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_status_unpacks_report() {
        let mut mock = MockClient::<Parcel>::new();
        let id = ParcelId::generate();
        mock.expect_action(id.clone())
            .return_ok(ParcelActionResult::Status(StatusReport {
                state: ParcelState::InTransit,
                next_leg: None,
                legs_remaining: 0,
            }));

        let client = ParcelClient::new(mock.client());
        let status = client.status(id).await.unwrap();

        assert_eq!(status.state, ParcelState::InTransit);
        assert_eq!(status.legs_remaining, 0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_parcels_awaiting_leg_uses_index_lookup() {
        let mut mock = MockClient::<Parcel>::new();
        let ids = vec![ParcelId::generate(), ParcelId::generate()];
        mock.expect_lookup(LegId::from("leg-001"))
            .return_ok(ids.clone());

        let client = ParcelClient::new(mock.client());
        let awaiting = client
            .parcels_awaiting_leg(LegId::from("leg-001"))
            .await
            .unwrap();

        assert_eq!(awaiting, ids);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<Parcel>::new();
        let id = ParcelId::generate();
        mock.expect_action(id.clone())
            .return_err(FrameworkError::ActorClosed);

        let client = ParcelClient::new(mock.client());
        let result = client.pickup(id).await;

        assert!(matches!(
            result,
            Err(ParcelError::ActorCommunicationError(msg)) if msg.contains("Actor closed")
        ));
    }
}
