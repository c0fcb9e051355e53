//! Category handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::{ValidatedJson, ValidatedQuery};
use crate::app::commands::{CategoryPatch, CreateCategory, DeleteCategory, UpdateCategory};
use crate::app::dto::{CategoryDto, MessageDto};
use crate::app::queries::{GetCategory, ListCategories};
use crate::app::{CommandHandler, QueryHandler};
use crate::domain::entities::CategoryId;
use crate::error::AppError;
use crate::AppState;

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateCategory>,
) -> Result<(StatusCode, Json<CategoryDto>), AppError> {
    let category = state.category_service.execute(command).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListCategories>,
) -> Result<Json<Vec<CategoryDto>>, AppError> {
    Ok(Json(state.category_service.fetch(query).await?))
}

/// GET /categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryDto>, AppError> {
    let query = GetCategory { id: CategoryId(id) };
    Ok(Json(state.category_service.fetch(query).await?))
}

/// PUT /categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<CategoryPatch>,
) -> Result<Json<CategoryDto>, AppError> {
    let command = UpdateCategory {
        id: CategoryId(id),
        patch,
    };
    Ok(Json(state.category_service.execute(command).await?))
}

/// DELETE /categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageDto>, AppError> {
    state
        .category_service
        .execute(DeleteCategory { id: CategoryId(id) })
        .await?;
    Ok(Json(MessageDto::new("Category deleted successfully")))
}
