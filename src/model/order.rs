use crate::model::{CustomerId, Patch, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u32 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order: one customer and a list of product ids.
///
/// `order_items` keeps its order and may repeat an id; a quantity is expressed by
/// repeating the product.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
/// Its hooks check `customer_id` and every entry of `order_items` against the customer
/// and product collections.
///
/// ```rust
/// use storefront::model::{CustomerId, Order, OrderId, ProductId};
///
/// let order = Order::new(OrderId(0), CustomerId(0), vec![ProductId(0); 3]);
/// assert_eq!(order.order_items.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub order_items: Vec<ProductId>,
}

impl Order {
    pub fn new(order_id: OrderId, customer_id: CustomerId, order_items: Vec<ProductId>) -> Self {
        Self {
            order_id,
            customer_id,
            order_items,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub order_items: Vec<ProductId>,
}

/// Partial payload for updating an order. `order_items`, when sent, replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub customer_id: Patch<CustomerId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub order_items: Patch<Vec<ProductId>>,
}
