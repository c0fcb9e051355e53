//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;

pub use postgres::{
    create_missing_tables, PostgresCategoryRepository, PostgresOrderRepository,
    PostgresProductRepository, PostgresUserRepository,
};
