//! Order domain entity
//!
//! Orders belong to a user and carry line items plus monetary fields that are
//! derived once, when the order is created.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::ProductId;
use super::user::UserId;
use crate::error::DomainError;

/// Flat sales tax applied to the subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat shipping charge per order (10.00)
pub const SHIPPING_COST: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Length of the random tail of an order number
const ORDER_SUFFIX_LEN: usize = 8;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an order line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderItemId(pub i32);

impl From<i32> for OrderItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status.
///
/// The usual progression is pending → confirmed → processing → shipped →
/// delivered, with cancelled reachable from anywhere. Transitions are not
/// validated: any status may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::Paypal => write!(f, "paypal"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
            PaymentMethod::CashOnDelivery => write!(f, "cash_on_delivery"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::Paypal),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "cash_on_delivery" => Ok(PaymentMethod::CashOnDelivery),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

/// A persisted order line
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// A persisted order with its line items
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub billing_address: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
}

/// A line to be written for an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl NewOrderItem {
    /// Build a line, deriving `total_price = quantity × unit_price`
    pub fn new(product_id: ProductId, quantity: i32, unit_price: Decimal) -> Result<Self, DomainError> {
        Ok(Self {
            product_id,
            quantity,
            unit_price,
            total_price: line_total(quantity, unit_price)?,
        })
    }
}

/// Monetary fields derived from an order's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
}

impl OrderTotals {
    /// Compute totals over the given lines.
    ///
    /// subtotal is the exact sum of line totals, tax is [`TAX_RATE`] of the
    /// subtotal, shipping is [`SHIPPING_COST`] and total is their sum.
    pub fn compute(items: &[NewOrderItem]) -> Result<Self, DomainError> {
        let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, item| {
            acc.checked_add(item.total_price).ok_or_else(overflow)
        })?;
        let tax_amount = subtotal.checked_mul(TAX_RATE).ok_or_else(overflow)?;
        let total_amount = subtotal
            .checked_add(tax_amount)
            .and_then(|t| t.checked_add(SHIPPING_COST))
            .ok_or_else(overflow)?;

        Ok(Self {
            subtotal,
            tax_amount,
            shipping_cost: SHIPPING_COST,
            total_amount,
        })
    }
}

/// Data needed to create an order and its lines in one write
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub payment_method: PaymentMethod,
    pub totals: OrderTotals,
    pub shipping_address: String,
    pub billing_address: String,
    pub notes: Option<String>,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<Option<String>>,
}

/// Partial update of a line. The line total follows quantity and unit price;
/// the parent order's totals do not.
#[derive(Debug, Clone, Default)]
pub struct OrderItemChanges {
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

/// Filter for listing orders
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<UserId>,
}

/// `quantity × unit_price`, failing instead of overflowing
pub fn line_total(quantity: i32, unit_price: Decimal) -> Result<Decimal, DomainError> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(overflow)
}

/// Generate a human-readable order number such as `ORD-20251110-3f9a1c2e`.
///
/// The random tail makes collisions unlikely, not impossible; the unique
/// constraint on `orders.order_number` is the final arbiter.
pub fn new_order_number(now: DateTime<Utc>) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ORDER_SUFFIX_LEN)
        .collect();
    format_order_number(now.date_naive(), &suffix)
}

fn format_order_number(date: NaiveDate, suffix: &str) -> String {
    format!("ORD-{}-{}", date.format("%Y%m%d"), suffix)
}

fn overflow() -> DomainError {
    DomainError::Validation("Order amount out of range".to_string())
}
