//! ActorEntity trait implementation for the Product record type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;
    const KIND: &'static str = "Product";

    fn id(&self) -> ProductId {
        self.id
    }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.price, params.description))
    }

    /// Merges the fields present in the payload.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `price`
    /// - `description`
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        update.name.apply_to(&mut self.name);
        update.price.apply_to(&mut self.price);
        update.description.apply_to(&mut self.description);
        Ok(())
    }
}
