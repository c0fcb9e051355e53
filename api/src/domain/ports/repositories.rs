//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups that miss return `Ok(None)` (or `Ok(false)` for deletes); turning
//! that into a not-found error is the caller's decision.

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryChanges, CategoryId, NewCategory, NewOrder, NewOrderItem, NewProduct,
    NewUser, Order, OrderChanges, OrderFilter, OrderId, OrderItem, OrderItemChanges, OrderItemId,
    OrderStatus, Page, Product, ProductChanges, ProductFilter, ProductId, User, UserChanges,
    UserFilter, UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by username (login name)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// List users matching a filter, ordered by ID
    async fn list(&self, filter: &UserFilter, page: Page) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Apply a partial update
    async fn update(&self, id: &UserId, changes: &UserChanges)
        -> Result<Option<User>, DomainError>;

    /// Delete a user; false when no such user exists
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    /// List categories, optionally only the children of `parent_id`
    async fn list(
        &self,
        parent_id: Option<CategoryId>,
        page: Page,
    ) -> Result<Vec<Category>, DomainError>;

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;

    async fn update(
        &self,
        id: &CategoryId,
        changes: &CategoryChanges,
    ) -> Result<Option<Category>, DomainError>;

    async fn delete(&self, id: &CategoryId) -> Result<bool, DomainError>;
}

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List products matching a filter, ordered by ID
    async fn list(&self, filter: &ProductFilter, page: Page)
        -> Result<Vec<Product>, DomainError>;

    /// Case-insensitive substring search over name or description
    async fn search(&self, query: &str, page: Page) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Apply a partial update
    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError>;

    /// Delete a product; false when no such product exists
    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError>;
}

/// Repository for Order entities and their line items
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order with its items
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// List orders (with items) matching a filter, ordered by ID
    async fn list(&self, filter: &OrderFilter, page: Page) -> Result<Vec<Order>, DomainError>;

    /// Persist an order and all of its items.
    ///
    /// Assigns the order number and the initial `pending` status.
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Apply a partial update to the order row
    async fn update(
        &self,
        id: &OrderId,
        changes: &OrderChanges,
    ) -> Result<Option<Order>, DomainError>;

    /// Set the order status
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;

    /// Append a line to an existing order; `None` when the order is missing
    async fn add_item(
        &self,
        order_id: &OrderId,
        item: &NewOrderItem,
    ) -> Result<Option<OrderItem>, DomainError>;

    /// Apply a partial update to a line, recomputing its line total
    async fn update_item(
        &self,
        id: &OrderItemId,
        changes: &OrderItemChanges,
    ) -> Result<Option<OrderItem>, DomainError>;

    /// Delete a line; false when no such line exists
    async fn delete_item(&self, id: &OrderItemId) -> Result<bool, DomainError>;
}
