//! Order commands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::double_option;
use crate::app::validation::{not_blank, positive_price, positive_price_change};
use crate::domain::entities::{
    NewOrderItem, OrderChanges, OrderId, OrderItemChanges, OrderItemId, OrderStatus,
    PaymentMethod, ProductId,
};
use crate::error::DomainError;

/// One line of an order as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemInput {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom(function = "positive_price"))]
    pub unit_price: Decimal,
}

impl TryFrom<&OrderItemInput> for NewOrderItem {
    type Error = DomainError;

    fn try_from(input: &OrderItemInput) -> Result<Self, Self::Error> {
        NewOrderItem::new(ProductId(input.product_id), input.quantity, input.unit_price)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    #[validate(range(min = 1))]
    pub user_id: i32,
    pub payment_method: PaymentMethod,
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub items: Vec<OrderItemInput>,
    #[validate(custom(function = "not_blank"))]
    pub shipping_address: String,
    #[validate(custom(function = "not_blank"))]
    pub billing_address: String,
    pub notes: Option<String>,
}

/// Status and payment method are constrained by their enums at parse time.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl From<OrderPatch> for OrderChanges {
    fn from(patch: OrderPatch) -> Self {
        OrderChanges {
            status: patch.status,
            payment_method: patch.payment_method,
            notes: patch.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOrder {
    pub id: OrderId,
    pub patch: OrderPatch,
}

#[derive(Debug, Clone)]
pub struct CancelOrder {
    pub id: OrderId,
    pub reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddOrderItem {
    pub order_id: OrderId,
    pub item: OrderItemInput,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "unit_price_change_is_positive"))]
pub struct OrderItemPatch {
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

fn unit_price_change_is_positive(patch: &OrderItemPatch) -> Result<(), ValidationError> {
    positive_price_change(patch.unit_price)
}

impl From<OrderItemPatch> for OrderItemChanges {
    fn from(patch: OrderItemPatch) -> Self {
        OrderItemChanges {
            quantity: patch.quantity,
            unit_price: patch.unit_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOrderItem {
    pub id: OrderItemId,
    pub patch: OrderItemPatch,
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveOrderItem {
    pub id: OrderItemId,
}
