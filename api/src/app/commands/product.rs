//! Product commands

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::double_option;
use crate::app::validation::{positive_price, positive_price_change};
use crate::domain::entities::{CategoryId, NewProduct, ProductChanges, ProductId};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub stock_quantity: i32,
    #[validate(length(min = 1, max = 100))]
    pub sku: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateProduct> for NewProduct {
    fn from(command: CreateProduct) -> Self {
        NewProduct {
            name: command.name,
            description: command.description,
            price: command.price,
            stock_quantity: command.stock_quantity,
            sku: command.sku,
            category_id: CategoryId(command.category_id),
            is_active: command.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "price_change_is_positive"))]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub sku: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    pub is_active: Option<bool>,
}

fn price_change_is_positive(patch: &ProductPatch) -> Result<(), ValidationError> {
    positive_price_change(patch.price)
}

impl From<ProductPatch> for ProductChanges {
    fn from(patch: ProductPatch) -> Self {
        ProductChanges {
            name: patch.name,
            description: patch.description,
            price: patch.price,
            stock_quantity: patch.stock_quantity,
            sku: patch.sku,
            category_id: patch.category_id.map(CategoryId),
            is_active: patch.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: ProductId,
    pub patch: ProductPatch,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteProduct {
    pub id: ProductId,
}
