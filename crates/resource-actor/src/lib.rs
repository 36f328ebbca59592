//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent resource actors: each resource
//! family (orders, restaurants, couriers, …) is owned by exactly one Tokio
//! task that processes requests **sequentially** from an mpsc channel.
//!
//! ## Why actors here?
//!
//! Sequential processing inside each actor turns read-then-write sequences
//! into critical sections without any locks: claiming a courier from a
//! restaurant's roster, or re-reading an order before mutating it, happens
//! atomically because no other request can interleave within the same actor.
//! Different actors still run in parallel on the runtime.
//!
//! ## The three layers
//!
//! 1. **Entity** ([`ActorEntity`]) — your domain type plus lifecycle hooks.
//!    The hooks receive a `Context` injected at `run()` time ("late binding"),
//!    which is how an order entity reaches the restaurant, catalog and
//!    discount clients it depends on.
//! 2. **Runtime** ([`ResourceActor`]) — the generic event loop. It owns the
//!    backing store (a `HashMap` keyed by `T::Id`) and an id factory, and
//!    dispatches Create / Get / Find / Update / Delete / Action requests.
//!    A created entity is inserted **only after** its `on_create` hook
//!    succeeds, so a half-initialized record is never observable.
//! 3. **Interface** ([`ResourceClient`]) — a cloneable, typed handle that
//!    forwards requests over the channel and awaits a oneshot reply. Domain
//!    clients wrap it and share plumbing through [`ActorClient`].
//!
//! ## Store contract
//!
//! Beyond CRUD, the actor supports two things a keyed record store needs:
//!
//! * **Find** — a batched secondary lookup: the caller sends a `T::Filter`
//!   and receives every matching entity back in one message.
//! * **Delete with payload** — `on_delete` receives a `T::Delete` value and
//!   may veto the removal (ownership checks, cancellation windows).
//!
//! ## Testing
//!
//! [`mock::MockClient`] implements the same API as the production client but
//! replays queued expectations in-memory, so client logic can be tested
//! without spawning a single actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
