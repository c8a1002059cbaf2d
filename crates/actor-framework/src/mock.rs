//! # Mock Framework
//!
//! Utilities for testing typed client wrappers without spawning a real actor.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | None, canned responses | Real store and index |
//! | **Use Case** | Logic *around* the client (error mapping, result unpacking) | The entity itself, or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//!
//! Two styles are available:
//!
//! - The fluent [`MockClient`]: queue expectations up front, run the code, then `verify()`.
//! - The channel helpers: [`create_mock_client`] hands back the receiver, and
//!   [`expect_create`], [`expect_get`], [`expect_action`] and [`expect_lookup`] pop the next
//!   request so a test can inspect the payload before answering it.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Pallet>(10);
//! let pallets = PalletClient::new(client);
//! let task = tokio::spawn(async move { pallets.move_to(7, "south".to_string()).await });
//!
//! let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
//! assert_eq!(id, 7);
//! assert!(matches!(action, PalletAction::MoveTo(ref bay) if bay == "south"));
//! responder.send(Err(FrameworkError::ActorClosed)).unwrap();
//! assert!(task.await.unwrap().is_err());
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Lookup {
        key: T::IndexKey,
        response: Result<Vec<T::Id>, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request of the wrong kind,
/// or addressed to a different ID/key than expected, panics the background task; the
/// caller then observes [`FrameworkError::ActorDropped`] and `verify()` reports the leftover.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get addressed to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action {
                            id,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action addressed to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Lookup { key, respond_to },
                        Some(Expectation::Lookup {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "lookup for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `lookup` operation.
    pub fn expect_lookup(&mut self, key: T::IndexKey) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response,
            });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response,
            });
    }
}

/// Builder for `lookup` expectations.
pub struct LookupExpectationBuilder<T: ActorEntity> {
    key: T::IndexKey,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> LookupExpectationBuilder<T> {
    pub fn return_ok(self, ids: Vec<T::Id>) {
        self.push(Ok(ids));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T::Id>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Lookup {
                key: self.key,
                response,
            });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pops the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a Lookup.
pub async fn expect_lookup<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::IndexKey,
    oneshot::Sender<Result<Vec<T::Id>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Lookup { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}
