//! # Customer Actor
//!
//! Directory of customers and staff. No context dependencies and no custom
//! actions; its main job is answering `get` requests so the order actor can
//! verify callers and check [`Role`](crate::model::Role) for staff-only
//! operations.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Customer, CustomerId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its generic client.
pub fn new() -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(32, CustomerId::random)
}
