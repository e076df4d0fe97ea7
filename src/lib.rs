//! # Storefront
//!
//! An in-memory store for customers, products and orders.
//!
//! Each collection lives in its own [`ResourceActor`](resource_actor::ResourceActor), so
//! requests against one collection are applied one at a time and never interleave. Orders
//! reference customers and products; the order actor checks those references on create
//! and update and answers with a Not-Found naming the first missing record.
//!
//! ## Modules
//!
//! - [`model`]: records, typed ids, create payloads and [`Patch`](model::Patch)-based
//!   update payloads
//! - [`customer_actor`], [`product_actor`], [`order_actor`]: entity hooks and errors
//! - [`clients`]: typed handles for each collection
//! - [`lifecycle`]: [`StoreSystem`](lifecycle::StoreSystem), which owns the actors
//! - [`config`]: [`StoreConfig`](config::StoreConfig) from the environment
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
