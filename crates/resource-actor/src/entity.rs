//! # ActorEntity Trait
//!
//! The contract every resource type must implement to be managed by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the
//! DTOs for each operation, so a request built for one entity family can
//! never be sent to another — the compiler rejects it.
//!
//! The lifecycle hooks are async (`#[async_trait]`) because entities often
//! need to call other actors while handling a request: an order validates its
//! restaurant, prices its items and claims a courier inside `on_create`.
//! Hooks with a default implementation (`on_create`, `on_delete`, `matches`)
//! only need overriding when the entity has something to say about them.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for a resource managed by a `ResourceActor`.
///
/// # Error granularity
/// One error enum per entity, not one per operation. The enum is the union of
/// everything the entity's hooks can fail with; callers match on a single
/// type. The theoretical loss of per-operation precision is worth the
/// reduction in boilerplate.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Generated by the id factory handed to
    /// [`ResourceActor::new`](crate::ResourceActor::new), so it can be a
    /// counter-based token or an opaque UUID newtype.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Payload accompanying a delete request. Lets `on_delete` authorize the
    /// removal (who is asking, and is it still allowed). Use `()` when
    /// deletes are unconditional.
    type Delete: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. `ClaimCourier`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for secondary lookups (e.g. "orders of customer X
    /// with status Y"). Use `()` when the entity is only fetched by id.
    type Filter: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook via `run(context)`.
    /// Use `()` when the entity has none.
    type Context: Send + Sync;

    /// The entity's error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its freshly generated id and the creation
    /// payload. Synchronous: static validation only, no collaborator calls.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is inserted into the
    /// store. This is where collaborator calls and derived-state computation
    /// belong; an `Err` here means nothing is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request arrives for this entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Returning `Err` vetoes the
    /// removal and the record stays untouched.
    async fn on_delete(
        &self,
        _params: Self::Delete,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Secondary-lookup predicate; entities for which this returns `true`
    /// are included in a `Find` response.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        false
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
