//! Application layer
//!
//! Commands, queries and the services that handle them.
//! Services coordinate between domain entities and repository ports.

pub mod auth_service;
pub mod category_service;
pub mod commands;
pub mod dispatch;
pub mod dto;
pub mod order_service;
pub mod product_service;
pub mod queries;
pub mod user_service;
pub mod validation;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use dispatch::{CommandHandler, QueryHandler};
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use user_service::UserService;
pub use validation::Paged;
