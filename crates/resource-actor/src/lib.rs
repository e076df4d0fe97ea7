//! # Resource Actor
//!
//! Generic building blocks for in-memory record collections served by Tokio actors.
//!
//! Each collection is owned by exactly one [`ResourceActor`], which processes requests
//! sequentially in its own task. Everything else holds a cloneable [`ResourceClient`]
//! and talks to the collection by message passing, so the mutable state has a single
//! owner and needs no lock.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - the collection, id allocation, message loop
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Operations
//!
//! Every collection supports the same five operations: `list`, `get`, `create`,
//! `update` (partial payload merged by [`ActorEntity::on_update`]) and `delete`. Absent
//! ids produce [`FrameworkError::NotFound`], rendered as
//! `"<Kind> with ID=<id> does not exist."`.
//!
//! ## Identifiers
//!
//! Ids come from an [`IdAllocator`]: strictly increasing, starting after the largest
//! seeded id, never reused after a delete, and only consumed by a successful create.
//! After `u32::MAX` creates fail with [`FrameworkError::IdsExhausted`] instead of wrapping.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to `run(context)`, not to `new()`. An actor whose hooks need
//! other collections receives their clients as its context:
//!
//! ```rust,ignore
//! let (customer_actor, customers) = ResourceActor::<Customer>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//! tokio::spawn(customer_actor.run(()));
//! tokio::spawn(order_actor.run(customers.clone()));
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which scripts the replies of a dependency.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use id::IdAllocator;
pub use message::{ResourceRequest, Response};
