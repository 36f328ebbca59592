//! # Fulfillment
//!
//! Order fulfillment and pricing engine for a restaurant delivery platform:
//! turns a raw order request into a priced, geographically validated,
//! courier-assigned order record, and governs that record's lifecycle
//! (bounded edits, bounded cancellation, staff-driven status progression).
//!
//! Every resource family lives behind its own actor (see the
//! `resource-actor` crate): orders, restaurants, couriers, menu items,
//! discounts and customers. Sequential message processing inside each actor
//! is what makes courier claiming atomic and order mutations race-free.
//!
//! ## Module map
//!
//! - [`config`] — the explicit policy knobs (fee coefficient, distance limit,
//!   mutation windows) passed in at construction.
//! - [`clock`] — injectable time source so window rules are testable.
//! - [`geo`] / [`geocode`] — great-circle distance and the external
//!   address-resolution boundary.
//! - [`pricing`] — exact fixed-point total computation and the delivery-fee
//!   policy.
//! - [`model`] — entities, ids and request payloads.
//! - [`order_actor`], [`restaurant_actor`], [`courier_actor`],
//!   [`catalog_actor`], [`discount_actor`], [`customer_actor`] — the actor
//!   implementations.
//! - [`clients`] — typed handles wrapping the generic resource clients.
//! - [`lifecycle`] — system wiring and graceful shutdown.

pub mod catalog_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod courier_actor;
pub mod customer_actor;
pub mod discount_actor;
pub mod geo;
pub mod geocode;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod restaurant_actor;
