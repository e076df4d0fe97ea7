//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, shared by every collection.

use crate::entity::ActorEntity;

/// Errors that can occur within the resource actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The requested id is absent from the collection.
    #[error("{kind} with ID={id} does not exist.")]
    NotFound { kind: &'static str, id: u32 },
    /// Every `u32` id has been handed out; the collection accepts no more creates.
    #[error("No {kind} ids left to allocate")]
    IdsExhausted { kind: &'static str },
    /// A lifecycle hook rejected the operation.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Not-Found for an id of entity type `T`.
    pub fn not_found<T: ActorEntity>(id: T::Id) -> Self {
        FrameworkError::NotFound {
            kind: T::KIND,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound { .. })
    }
}
