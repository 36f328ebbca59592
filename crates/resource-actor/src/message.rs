//! # Request Messages
//!
//! The wire format between a [`ResourceClient`](crate::ResourceClient) and
//! its [`ResourceActor`](crate::ResourceActor). Every variant carries a
//! oneshot `respond_to` channel, so each request is a complete
//! request/response exchange and the caller can await a typed result.
//!
//! The variants map onto the operations a keyed record store exposes:
//! create, read-by-id, read-by-predicate (`Find`), field update, delete (with
//! an authorization payload), plus an `Action` escape hatch for operations
//! that are not CRUD-shaped, such as claiming a courier from a roster.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request sent to a `ResourceActor`.
///
/// Generic over `T: ActorEntity`: every payload is one of `T`'s associated
/// types, so a request for one entity family cannot be addressed to another.
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
    /// Batched secondary lookup: returns every entity matching the filter.
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    /// Delete carries a payload so the entity can authorize the removal.
    Delete {
        id: T::Id,
        params: T::Delete,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
