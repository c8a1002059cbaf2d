//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] under a generated ID.
/// - **Get**: returns a snapshot of the entity, if present.
/// - **Action**: runs a staged [`ActorEntity::Action`] against one entity.
/// - **Lookup**: lists the IDs filed under one secondary index key.
/// - **RebuildIndex**: discards the secondary index and recomputes it from the store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Lookup {
        key: T::IndexKey,
        respond_to: Response<Vec<T::Id>>,
    },
    RebuildIndex {
        respond_to: Response<usize>,
    },
}
