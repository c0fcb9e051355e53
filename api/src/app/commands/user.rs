//! User commands

use serde::Deserialize;
use validator::Validate;

use super::double_option;
use crate::domain::entities::{UserChanges, UserId, UserRole};

/// Register a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    /// Plain-text password; hashed before it reaches storage
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 50))]
    pub city: Option<String>,
    #[validate(length(max = 50))]
    pub country: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Fields a client may change on a user. Absent keys are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserPatch {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 50))]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 50))]
    pub country: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl From<UserPatch> for UserChanges {
    fn from(patch: UserPatch) -> Self {
        UserChanges {
            email: patch.email,
            username: patch.username,
            full_name: patch.full_name,
            phone: patch.phone,
            address: patch.address,
            city: patch.city,
            country: patch.country,
            is_active: patch.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: UserId,
    pub patch: UserPatch,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteUser {
    pub id: UserId,
}
