//! # Order Actor
//!
//! The center of the engine. An order is priced, geographically validated and
//! courier-assigned inside `on_create`; bounded edits with full repricing
//! happen in `on_update`; cancellation (with its buffer before the estimated
//! delivery time) is the `on_delete` veto; staff status progression is the
//! [`UpdateStatus`](actions::OrderAction) action.
//!
//! ## Dependencies
//!
//! Unlike the directory actors, orders need the rest of the system. The
//! [`OrderContext`](entity::OrderContext) injected at `run()` carries the
//! engine config, the clock, the geocoder and a client for every other
//! actor. Late binding via context keeps construction order trivial: all
//! actors are created first, then each is started with the clients it needs.
//!
//! ## Why failures cannot half-apply
//!
//! - Creation inserts nothing until every step (validation, geocoding,
//!   pricing, courier claim) has succeeded; the claim runs last so a pricing
//!   failure never leaks a busy courier.
//! - Edits are applied to a draft clone and committed only after the draft
//!   has been fully revalidated and repriced.
//! - Claims and releases are single messages to the restaurant actor, which
//!   processes them sequentially.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::model::{Order, OrderId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its generic client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32, OrderId::random)
}
