//! Typed clients, one per collection.
//!
//! Each wraps a [`ResourceClient`](resource_actor::ResourceClient) and implements
//! [`ActorClient`](resource_actor::ActorClient), so `list`, `get`, `exists` and `delete`
//! are shared and only create/update carry entity-specific payloads.

#[macro_use]
mod macros;

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
