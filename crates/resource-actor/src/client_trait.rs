//! # ActorClient Trait
//!
//! Shared plumbing for resource-specific clients. Domain clients (order,
//! restaurant, discount, …) wrap a [`ResourceClient`] and add their own typed
//! methods; this trait contributes the operations whose shape is identical
//! everywhere — fetch by id, secondary lookup, delete — together with the
//! mapping from [`FrameworkError`] into the client's domain error.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching a filter.
    #[tracing::instrument(skip(self, filter))]
    async fn find(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        self.inner().find(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity, subject to the entity's `on_delete` authorization.
    #[tracing::instrument(skip(self, params))]
    async fn delete(&self, id: T::Id, params: T::Delete) -> Result<(), Self::Error> {
        self.inner().delete(id, params).await.map_err(Self::map_error)
    }
}
