//! Typed clients, one per actor.
//!
//! Each client wraps the generic [`ResourceClient`](resource_actor::ResourceClient)
//! for its entity and exposes domain-named methods with domain error types.
//! The shared CRUD plumbing comes from
//! [`ActorClient`](resource_actor::ActorClient); the `map_error`
//! implementation downcasts entity errors back to the actor's own enum so
//! callers can match on typed failures.

pub mod catalog_client;
pub mod courier_client;
pub mod customer_client;
pub mod discount_client;
pub mod order_client;
pub mod restaurant_client;

pub use catalog_client::CatalogClient;
pub use courier_client::CourierClient;
pub use customer_client::CustomerClient;
pub use discount_client::DiscountClient;
pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
