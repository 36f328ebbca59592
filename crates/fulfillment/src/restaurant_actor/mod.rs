//! # Restaurant Actor
//!
//! Restaurants with their fixed locations and courier rosters. Roster state
//! lives here and nowhere else: courier assignment goes through the
//! [`ClaimCourier`](actions::RestaurantAction) action, which the actor
//! processes one message at a time, so two orders racing for the last
//! available courier cannot both win. Selection is deterministic — the
//! available courier with the smallest id is claimed.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Restaurant, RestaurantId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its generic client.
pub fn new() -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(32, RestaurantId::random)
}
