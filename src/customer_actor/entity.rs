//! ActorEntity trait implementation for the Customer record type.
//!
//! Customers have no dependencies and no referential checks; an update is a plain
//! field-by-field merge of the partial payload.

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Context = ();
    type Error = CustomerError;
    const KIND: &'static str = "Customer";

    fn id(&self) -> CustomerId {
        self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Merges the fields present in the payload.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: contact address, `Set(None)` clears it
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        update.name.apply_to(&mut self.name);
        update.email.apply_to(&mut self.email);
        Ok(())
    }
}
