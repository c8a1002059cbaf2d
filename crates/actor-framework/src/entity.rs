//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type implements to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the identifier, creation payload,
//! action and context types, and optionally a secondary index key.
//!
//! # Provided Methods
//! - [`ActorEntity::index_key`] defaults to `None` (the entity is never indexed).
//!
//! Everything else must be implemented.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so creation and actions may await other services.
/// The `Context` type is injected into every hook when the actor starts running
/// (late binding: dependencies are passed to `run()`, not to `new()`).
///
/// # Staging
/// `handle_action` runs against a copy of the stored entity. The copy replaces the
/// stored value only when the action returns `Ok`, so an implementation may mutate
/// `self` before discovering an error without leaving partial state behind.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Key of the secondary index maintained by the actor.
    /// Use `()` when the entity is never indexed.
    type IndexKey: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor, shared by every action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from a freshly generated ID and its creation payload.
    ///
    /// Returning an error aborts the creation: nothing is stored and the ID is discarded.
    async fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// The secondary index bucket this entity currently belongs to.
    ///
    /// Must be a pure function of the entity's state: the actor recomputes it after every
    /// committed change and when rebuilding the index from scratch.
    fn index_key(&self) -> Option<Self::IndexKey> {
        None
    }
}
