//! Records present at startup when seeding is enabled.
//!
//! The seeded order references customer 0 and products 1..=3, none of which are seeded.
//! Seeds are inserted directly and skip the referential checks.

use crate::model::{CustomerId, Order, OrderId, Product, ProductId};

pub fn demo_products() -> Vec<Product> {
    vec![Product::new(ProductId(0), "Product", 0.0, "Description")]
}

pub fn demo_orders() -> Vec<Order> {
    vec![Order::new(
        OrderId(0),
        CustomerId(0),
        (0..4).map(ProductId).collect(),
    )]
}
