use serde::Deserialize;
use validator::Validate;

use super::{default_limit, default_true};
use crate::app::validation::{offset_in_range, Paged};
use crate::domain::entities::{Page, UserFilter, UserId, UserRole};

#[derive(Debug, Clone, Copy)]
pub struct GetUser {
    pub id: UserId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "offset_in_range"))]
pub struct ListUsers {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
    pub role: Option<UserRole>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ListUsers {
    pub fn filter(&self) -> UserFilter {
        UserFilter {
            role: self.role,
            active_only: self.is_active,
        }
    }
}

impl Paged for ListUsers {
    fn page(&self) -> Page {
        Page {
            skip: self.skip,
            limit: self.limit,
        }
    }
}
