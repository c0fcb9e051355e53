use serde::Deserialize;
use validator::Validate;

use super::{default_limit, default_true};
use crate::app::validation::{offset_in_range, Paged};
use crate::domain::entities::{CategoryId, Page, ProductFilter, ProductId};

#[derive(Debug, Clone, Copy)]
pub struct GetProduct {
    pub id: ProductId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct ListProducts {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ListProducts {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category_id: self.category_id.map(CategoryId),
            active_only: self.is_active,
        }
    }
}

impl Paged for ListProducts {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

/// Case-insensitive substring search over name and description
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct SearchProducts {
    #[validate(length(min = 1, max = 100))]
    pub query: String,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

impl Paged for SearchProducts {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}
