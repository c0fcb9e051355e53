//! Storefront domain
//!
//! - `entities`: users, catalog (categories and products) and orders, plus
//!   the order arithmetic
//! - `ports`: repository traits the storage adapters implement

pub mod entities;
pub mod ports;
