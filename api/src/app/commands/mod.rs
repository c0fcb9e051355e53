//! Commands
//!
//! Write-side request objects. They carry field constraints only; handlers
//! live on the services.

pub mod auth;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use auth::Login;
pub use category::{CategoryPatch, CreateCategory, DeleteCategory, UpdateCategory};
pub use order::{
    AddOrderItem, CancelOrder, CreateOrder, OrderItemInput, OrderItemPatch, OrderPatch,
    RemoveOrderItem, UpdateOrder, UpdateOrderItem,
};
pub use product::{CreateProduct, DeleteProduct, ProductPatch, UpdateProduct};
pub use user::{CreateUser, DeleteUser, UpdateUser, UserPatch};

/// Deserialize a nullable field of a partial update.
///
/// Used with `#[serde(default)]`: an absent key stays `None`, an explicit
/// `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
