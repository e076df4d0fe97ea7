use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_client_methods!(
    ProductClient,
    Product,
    ProductCreate,
    ProductUpdate,
    ProductError,
    product
);

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_delete(ProductId(4))
            .return_err(FrameworkError::not_found::<Product>(ProductId(4)));
        let client = ProductClient::new(mock.client());

        let err = client.delete(ProductId(4)).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound(ProductId(4)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_exists() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(0))
            .return_ok(Some(Product::new(ProductId(0), "Product", 0.0, "Description")));
        mock.expect_get(ProductId(1)).return_ok(None);
        let client = ProductClient::new(mock.client());

        assert!(client.exists(ProductId(0)).await.unwrap());
        assert!(!client.exists(ProductId(1)).await.unwrap());
        mock.verify();
    }
}
