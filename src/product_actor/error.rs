//! Error types for the Product actor.

use crate::model::ProductId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product is not in the collection.
    #[error("Product with ID={0} does not exist.")]
    NotFound(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => ProductError::NotFound(ProductId(id)),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
