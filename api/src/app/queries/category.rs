use serde::Deserialize;
use validator::Validate;

use super::default_limit;
use crate::app::validation::{offset_in_range, Paged};
use crate::domain::entities::{CategoryId, Page};

#[derive(Debug, Clone, Copy)]
pub struct GetCategory {
    pub id: CategoryId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct ListCategories {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,
}

impl Paged for ListCategories {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}
