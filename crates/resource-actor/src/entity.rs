//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type (Customer, Product, Order, …)
//! implements to be stored by the generic [`ResourceActor`](crate::ResourceActor). It names
//! the identifier type, the create and partial-update payloads, the injected context and
//! the error type, and provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. `on_update` has no default: every entity decides how a
//! partial payload is merged into its stored fields.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can consult other actors (e.g. an order checking that its
/// customer exists). The `Context` associated type is handed to every hook; it is supplied
/// when the actor loop starts (`run(context)`), not when the actor is built.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Integer identifier. Converts to and from the raw `u32` the allocator hands out.
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// Full payload for creating a record (every required field present).
    type Create: Send + Sync + Debug;

    /// Partial payload for updating a record (only the fields being changed).
    type Update: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` when there are none.
    type Context: Send + Sync;

    /// Per-entity error returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Human-readable entity name, used in Not-Found messages ("Customer", "Order", …).
    const KIND: &'static str;

    /// The identifier stored in this record.
    fn id(&self) -> Self::Id;

    /// Construct the full record from a freshly allocated id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before insertion. An error aborts the create and
    /// the allocated id is not consumed.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Validate and merge a partial payload. Called on a copy of the stored record; the
    /// copy replaces the stored record only if this returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
