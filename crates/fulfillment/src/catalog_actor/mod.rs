//! # Catalog Actor
//!
//! Menu items with their unit prices. The order actor queries it with
//! [`MenuFilter::RestaurantItems`](crate::model::MenuFilter) to fetch every
//! price an order needs in one round trip, so a quote never interleaves with
//! price updates.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{ItemId, MenuItem};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Catalog actor and its generic client.
pub fn new() -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(32, ItemId::random)
}
