//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: `get` and `lookup` come for free
//! once a wrapper exposes its inner [`ResourceClient`] and an error mapping.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the generic read operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Parcel> for ParcelClient {
///     type Error = ParcelError;
///
///     fn inner(&self) -> &ResourceClient<Parcel> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ParcelError::ActorCommunicationError(e.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List the IDs filed under an index key.
    #[tracing::instrument(skip(self))]
    async fn lookup(&self, key: T::IndexKey) -> Result<Vec<T::Id>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().lookup(key).await.map_err(Self::map_error)
    }
}
