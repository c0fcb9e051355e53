//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::auth::hash_password;
use crate::domain::entities::{
    Category, CategoryId, Order, OrderId, OrderItem, OrderItemId, OrderStatus, PaymentMethod,
    Product, ProductId, User, UserId, UserRole,
};

/// Password every fixture user can log in with
pub const TEST_PASSWORD: &str = "securepassword123";

/// Argon2 hash of [`TEST_PASSWORD`], computed once per test binary
fn test_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(TEST_PASSWORD).unwrap()).clone()
}

fn money(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Create an active customer
pub fn test_user(id: i32, username: &str) -> User {
    User {
        id: UserId(id),
        email: format!("{}@example.com", username),
        username: username.to_string(),
        full_name: "Test User".to_string(),
        hashed_password: test_password_hash(),
        phone: None,
        address: None,
        city: None,
        country: None,
        role: UserRole::Customer,
        is_active: true,
        is_verified: false,
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create a top-level category
pub fn test_category(id: i32, slug: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        parent_id: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create an active product in category 1 priced at 199.99
pub fn test_product(id: i32, name: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: Some("A test product".to_string()),
        price: money("199.99"),
        stock_quantity: 100,
        sku: format!("SKU-{:03}", id),
        is_active: true,
        category_id: CategoryId(1),
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create a pending order with one line: 2 × 199.99 of product 1.
///
/// Item ids are `order_id * 100 + n` so several fixture orders never clash.
pub fn test_order(id: i32, user_id: i32) -> Order {
    Order {
        id: OrderId(id),
        order_number: format!("ORD-20250101-{:08x}", id),
        user_id: UserId(user_id),
        status: OrderStatus::Pending,
        payment_method: PaymentMethod::CreditCard,
        subtotal: money("399.98"),
        tax_amount: money("31.9984"),
        shipping_cost: money("10.00"),
        total_amount: money("441.9784"),
        shipping_address: "123 Main St".to_string(),
        billing_address: "123 Main St".to_string(),
        notes: Some("Leave at the front door".to_string()),
        created_at: Utc::now(),
        updated_at: None,
        items: vec![OrderItem {
            id: OrderItemId(id * 100 + 1),
            order_id: OrderId(id),
            product_id: ProductId(1),
            quantity: 2,
            unit_price: money("199.99"),
            total_price: money("399.98"),
        }],
    }
}
