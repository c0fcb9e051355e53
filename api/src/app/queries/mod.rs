//! Queries
//!
//! Read-side request objects. Listing queries carry `skip`/`limit` straight
//! from the query string; `limit` is 1 to 100 and `skip` must fit the
//! database OFFSET.

pub mod category;
pub mod order;
pub mod product;
pub mod user;

use serde::Deserialize;
use validator::Validate;

use crate::app::validation::{offset_in_range, Paged};
use crate::domain::entities::{Page, DEFAULT_LIMIT};

pub use category::{GetCategory, ListCategories};
pub use order::{GetOrder, ListOrders, ListUserOrders};
pub use product::{GetProduct, ListProducts, SearchProducts};
pub use user::{GetUser, ListUsers};

pub(crate) fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

pub(crate) fn default_true() -> bool {
    true
}

/// Bare `skip`/`limit` pair for listings with no other filters
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct PageParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
}

impl Paged for PageParams {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        params.page()
    }
}
