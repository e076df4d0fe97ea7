//! # Store Lifecycle
//!
//! Starting, wiring, seeding and stopping the collection actors.
//!
//! Actors are built without dependencies and receive them when they start
//! (`run(context)`). The customer and product actors take `()`; the order actor takes
//! clones of the customer and product clients. The dependency graph is acyclic, so
//! dropping the clients held by [`StoreSystem`] is enough to stop everything.

pub mod seed;
pub mod store_system;

pub use store_system::*;
