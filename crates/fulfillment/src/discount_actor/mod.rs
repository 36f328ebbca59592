//! # Discount Actor
//!
//! Percentage-off codes with expiry instants. Lookup is by exact code via
//! [`DiscountFilter::ByCode`](crate::model::DiscountFilter); each resolution
//! also sweeps expired codes out of the store with
//! [`DiscountFilter::Expired`](crate::model::DiscountFilter) as best-effort
//! housekeeping. Expiry itself is judged at read time, so a code that
//! outlived its `expires_at` is reported as expired, not unknown.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Discount, DiscountId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Discount actor and its generic client.
pub fn new() -> (ResourceActor<Discount>, ResourceClient<Discount>) {
    ResourceActor::new(32, DiscountId::random)
}
