use serde::Deserialize;
use validator::Validate;

use super::default_limit;
use crate::app::validation::{offset_in_range, Paged};
use crate::domain::entities::{OrderId, OrderStatus, Page, UserId};

#[derive(Debug, Clone, Copy)]
pub struct GetOrder {
    pub id: OrderId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct ListOrders {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
    pub status: Option<OrderStatus>,
}

impl Paged for ListOrders {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

/// Orders placed by one user. `user_id` comes from the path.
#[derive(Debug, Clone, Copy)]
pub struct ListUserOrders {
    pub user_id: UserId,
    pub page: Page,
}
