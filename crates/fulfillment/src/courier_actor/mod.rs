//! # Courier Actor
//!
//! Directory of courier profiles (name, phone). Availability is not stored
//! here: whether a courier can take a delivery is per-restaurant roster
//! state, owned by the restaurant actor where the claim must be atomic.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Courier, CourierId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Courier actor and its generic client.
pub fn new() -> (ResourceActor<Courier>, ResourceClient<Courier>) {
    ResourceActor::new(32, CourierId::random)
}
