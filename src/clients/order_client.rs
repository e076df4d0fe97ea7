//! # Order Client
//!
//! High-level API for the Order actor. Referential checks run inside the actor's hooks;
//! a failed check comes back from `create_order`/`update_order` as the
//! [`OrderError::Customer`] or [`OrderError::Product`] variant raised by the hook.
use crate::model::{Order, OrderCreate, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_client_methods!(OrderClient, Order, OrderCreate, OrderUpdate, OrderError, order);

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_actor::CustomerError;
    use crate::model::{CustomerId, OrderId, ProductId};
    use resource_actor::mock::{create_mock_client, expect_create};

    #[tokio::test]
    async fn test_create_order_unwraps_hook_error() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let params = OrderCreate {
            customer_id: CustomerId(7),
            order_items: vec![ProductId(0)],
        };
        let handle = tokio::spawn(async move { client.create_order(params).await });

        let (received, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(received.customer_id, CustomerId(7));
        let hook_error = OrderError::Customer(CustomerError::NotFound(CustomerId(7)));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(hook_error.clone()))))
            .unwrap();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err, hook_error);
        assert_eq!(err.to_string(), "Customer with ID=7 does not exist.");
    }

    #[tokio::test]
    async fn test_create_order_success() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let params = OrderCreate {
            customer_id: CustomerId(0),
            order_items: vec![ProductId(0), ProductId(0)],
        };
        let handle = tokio::spawn(async move { client.create_order(params).await });

        let (received, responder) = expect_create(&mut receiver).await.unwrap();
        let order = Order::new(OrderId(1), received.customer_id, received.order_items);
        responder.send(Ok(order.clone())).unwrap();

        assert_eq!(handle.await.unwrap().unwrap(), order);
    }
}
