//! Error types for the Order actor.

use crate::customer_actor::CustomerError;
use crate::model::OrderId;
use crate::product_actor::ProductError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// A missing customer or product surfaces through the wrapped error, so its message names
/// the referenced entity ("Customer with ID=0 does not exist.").
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order is not in the collection.
    #[error("Order with ID={0} does not exist.")]
    NotFound(OrderId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// True for any Not-Found, whether about the order itself or a referenced record.
    pub fn is_not_found(&self) -> bool {
        match self {
            OrderError::NotFound(_) => true,
            OrderError::Customer(e) => e.is_not_found(),
            OrderError::Product(e) => e.is_not_found(),
            OrderError::ActorCommunicationError(_) => false,
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => OrderError::NotFound(OrderId(id)),
            // Hook errors come back boxed from the actor loop.
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, ProductId};

    #[test]
    fn test_referenced_not_found_message_names_the_entity() {
        let err = OrderError::from(CustomerError::NotFound(CustomerId(0)));
        assert_eq!(err.to_string(), "Customer with ID=0 does not exist.");
        assert!(err.is_not_found());

        let err = OrderError::from(ProductError::NotFound(ProductId(5)));
        assert_eq!(err.to_string(), "Product with ID=5 does not exist.");
    }

    #[test]
    fn test_hook_error_is_recovered_from_framework_error() {
        let hook_error = OrderError::Product(ProductError::NotFound(ProductId(3)));
        let framework = FrameworkError::EntityError(Box::new(hook_error.clone()));
        assert_eq!(OrderError::from(framework), hook_error);
    }

    #[test]
    fn test_own_not_found() {
        let framework = FrameworkError::NotFound {
            kind: "Order",
            id: 9,
        };
        let err = OrderError::from(framework);
        assert_eq!(err, OrderError::NotFound(OrderId(9)));
        assert_eq!(err.to_string(), "Order with ID=9 does not exist.");
    }
}
