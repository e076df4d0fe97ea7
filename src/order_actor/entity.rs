//! ActorEntity trait implementation for the Order record type.
//!
//! Orders are the only records with references. Both hooks check them before anything is
//! stored:
//!
//! 1. the customer id, against the customer collection
//! 2. each product id in `order_items`, in list order, against the product collection
//!
//! The first missing record aborts the operation with a Not-Found naming it. On update
//! only the fields present in the partial payload are checked.

use crate::clients::{CustomerClient, ProductClient};
use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, Order, OrderCreate, OrderId, OrderUpdate, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use std::collections::HashSet;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = (CustomerClient, ProductClient);
    type Error = OrderError;
    const KIND: &'static str = "Order";

    fn id(&self) -> OrderId {
        self.order_id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.customer_id, params.order_items))
    }

    /// Checks the customer, then every product, before the order is inserted.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (customers, products) = ctx;
        ensure_customer(customers, self.customer_id).await?;
        ensure_products(products, &self.order_items).await?;
        Ok(())
    }

    /// Checks the referenced ids carried by the payload, then merges it.
    ///
    /// `order_items`, when present, replaces the stored list wholesale.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let (customers, products) = ctx;
        if let Some(customer_id) = update.customer_id.as_set() {
            ensure_customer(customers, *customer_id).await?;
        }
        if let Some(items) = update.order_items.as_set() {
            ensure_products(products, items).await?;
        }

        update.customer_id.apply_to(&mut self.customer_id);
        update.order_items.apply_to(&mut self.order_items);
        Ok(())
    }
}

async fn ensure_customer(customers: &CustomerClient, id: CustomerId) -> Result<(), OrderError> {
    if customers.exists(id).await? {
        Ok(())
    } else {
        debug!(%id, "Referenced customer missing");
        Err(CustomerError::NotFound(id).into())
    }
}

/// Stops at the first missing id. Repeated ids are looked up once.
async fn ensure_products(products: &ProductClient, items: &[ProductId]) -> Result<(), OrderError> {
    let mut checked = HashSet::new();
    for &id in items {
        if !checked.insert(id) {
            continue;
        }
        if !products.exists(id).await? {
            debug!(%id, "Referenced product missing");
            return Err(ProductError::NotFound(id).into());
        }
    }
    Ok(())
}
