//! # Order Actor
//!
//! The order collection. Its hooks consult the customer and product actors, so the actor
//! is started with a `(CustomerClient, ProductClient)` context:
//!
//! ```rust
//! use storefront::{customer_actor, order_actor, product_actor};
//! use storefront::model::{CustomerCreate, OrderCreate, CustomerId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (customers, customer_client) = customer_actor::new(8);
//!     let (products, product_client) = product_actor::new(8);
//!     let (orders, order_client) = order_actor::new(8);
//!     tokio::spawn(customers.run(()));
//!     tokio::spawn(products.run(()));
//!     tokio::spawn(orders.run((customer_client.clone(), product_client)));
//!
//!     let params = OrderCreate { customer_id: CustomerId(0), order_items: vec![] };
//!     let err = order_client.create_order(params).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Customer with ID=0 does not exist.");
//!
//!     let alice = CustomerCreate { name: "Alice".into(), email: None };
//!     let alice = customer_client.create_customer(alice).await.unwrap();
//!     let params = OrderCreate { customer_id: alice.id, order_items: vec![] };
//!     assert!(order_client.create_order(params).await.is_ok());
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The customer and product clients are passed to `run`, not here.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
