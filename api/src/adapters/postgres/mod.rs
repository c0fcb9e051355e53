//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod order_repo;
pub mod product_repo;
pub mod schema;
pub mod user_repo;


pub use category_repo::PostgresCategoryRepository;
pub use order_repo::PostgresOrderRepository;
pub use product_repo::PostgresProductRepository;
pub use schema::create_missing_tables;
pub use user_repo::PostgresUserRepository;
