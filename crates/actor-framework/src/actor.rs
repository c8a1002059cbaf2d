//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the entity store and
//! its secondary index. It processes messages sequentially, so every request sees and
//! leaves a consistent store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store` and `index`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Messages are processed one at a time inside a single Tokio task, so there is no
/// `Mutex` around the store. A check followed by a write (e.g. "is this the expected
/// next step? then record it") cannot interleave with another request.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create**: generates an ID with `next_id_fn`, rejects duplicates, builds the entity with
///   [`ActorEntity::from_create_params`], files it in the index and stores it.
/// * **Get**: returns a clone of the stored entity, or `None`.
/// * **Action**: clones the stored entity, runs [`ActorEntity::handle_action`] on the clone and,
///   on success only, swaps the clone in and moves the entity between index buckets.
/// * **Lookup**: returns the IDs filed under an index key, in ascending order.
/// * **RebuildIndex**: recomputes the index from the store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    index: HashMap<T::IndexKey, BTreeSet<T::Id>>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When full, client calls wait for space.
    /// * `next_id_fn` - Generator invoked once per `Create` request.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            index: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Parcel" instead of "parcel_service::model::parcel::Parcel")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.apply_action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Lookup { key, respond_to } => {
                    let ids = self.lookup(&key);
                    debug!(entity_type, %key, count = ids.len(), "Lookup");
                    let _ = respond_to.send(Ok(ids));
                }
                ResourceRequest::RebuildIndex { respond_to } => {
                    let indexed = self.rebuild_index();
                    info!(entity_type, indexed, buckets = self.index.len(), "Index rebuilt");
                    let _ = respond_to.send(Ok(indexed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }

        let item = T::from_create_params(id.clone(), params, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.reindex(&id, None, item.index_key());
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn apply_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let current = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let previous_key = current.index_key();
        let mut staged = current.clone();

        let result = staged
            .handle_action(action, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.reindex(id, previous_key, staged.index_key());
        self.store.insert(id.clone(), staged);
        Ok(result)
    }

    fn lookup(&self, key: &T::IndexKey) -> Vec<T::Id> {
        self.index
            .get(key)
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn reindex(
        &mut self,
        id: &T::Id,
        previous: Option<T::IndexKey>,
        current: Option<T::IndexKey>,
    ) {
        if previous == current {
            return;
        }
        if let Some(key) = previous {
            if let Some(bucket) = self.index.get_mut(&key) {
                bucket.remove(id);
                if bucket.is_empty() {
                    self.index.remove(&key);
                }
            }
        }
        if let Some(key) = current {
            self.index.entry(key).or_default().insert(id.clone());
        }
    }

    fn rebuild_index(&mut self) -> usize {
        self.index.clear();
        for (id, item) in &self.store {
            if let Some(key) = item.index_key() {
                self.index.entry(key).or_default().insert(id.clone());
            }
        }
        self.index.values().map(BTreeSet::len).sum()
    }
}
