//! Error types for the Customer actor.

use crate::model::CustomerId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer is not in the collection.
    #[error("Customer with ID={0} does not exist.")]
    NotFound(CustomerId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CustomerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CustomerError::NotFound(_))
    }
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => CustomerError::NotFound(CustomerId(id)),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
