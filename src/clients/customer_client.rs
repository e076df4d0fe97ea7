use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl_client_methods!(
    CustomerClient,
    Customer,
    CustomerCreate,
    CustomerUpdate,
    CustomerError,
    customer
);

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}
