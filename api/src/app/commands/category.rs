//! Category commands

use serde::Deserialize;
use validator::Validate;

use super::double_option;
use crate::domain::entities::{CategoryChanges, CategoryId, NewCategory};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,
}

impl From<CreateCategory> for NewCategory {
    fn from(command: CreateCategory) -> Self {
        NewCategory {
            name: command.name,
            slug: command.slug,
            description: command.description,
            parent_id: command.parent_id.map(CategoryId),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 1))]
    pub parent_id: Option<Option<i32>>,
}

impl From<CategoryPatch> for CategoryChanges {
    fn from(patch: CategoryPatch) -> Self {
        CategoryChanges {
            name: patch.name,
            slug: patch.slug,
            description: patch.description,
            parent_id: patch.parent_id.map(|p| p.map(CategoryId)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub id: CategoryId,
    pub patch: CategoryPatch,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteCategory {
    pub id: CategoryId,
}
