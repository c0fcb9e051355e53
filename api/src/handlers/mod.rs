//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Each one extracts and
//! validates its input, dispatches a command or query, and wraps the DTO.

pub mod auth;
pub mod categories;
pub mod extract;
pub mod orders;
pub mod products;
pub mod system;
pub mod users;

pub use auth::{login, token};
pub use categories::{
    create_category, delete_category, get_category, list_categories, update_category,
};
pub use orders::{
    add_order_item, cancel_order, create_order, get_order, list_orders, list_user_orders,
    remove_order_item, update_order, update_order_item,
};
pub use products::{
    create_product, delete_product, get_product, list_products, search_products, update_product,
};
pub use system::{health, root};
pub use users::{create_user, delete_user, get_me, get_user, list_users, update_user};
