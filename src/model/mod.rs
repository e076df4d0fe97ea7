//! Record types and their create/update payloads.

pub mod customer;
pub mod order;
pub mod patch;
pub mod product;

pub use customer::*;
pub use order::*;
pub use patch::*;
pub use product::*;
