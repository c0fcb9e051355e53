//! SeaORM entities
//!
//! Storage-level row models. Domain models live in `domain::entities`;
//! adapters convert between the two.

pub mod categories;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod users;
