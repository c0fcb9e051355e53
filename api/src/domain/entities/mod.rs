//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use category::{Category, CategoryChanges, CategoryId, NewCategory};
pub use order::{
    line_total, new_order_number, NewOrder, NewOrderItem, Order, OrderChanges, OrderFilter,
    OrderId, OrderItem, OrderItemChanges, OrderItemId, OrderStatus, OrderTotals, PaymentMethod,
};
pub use page::{Page, DEFAULT_LIMIT, MAX_SKIP};
pub use product::{NewProduct, Product, ProductChanges, ProductFilter, ProductId};
pub use user::{NewUser, User, UserChanges, UserFilter, UserId, UserRole};
