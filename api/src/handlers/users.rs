//! User handlers
//!
//! Registration is public; changing or deleting an account needs a bearer
//! token.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::extract::{ValidatedJson, ValidatedQuery};
use crate::app::commands::{CreateUser, DeleteUser, UpdateUser, UserPatch};
use crate::app::dto::{MessageDto, UserDto};
use crate::app::queries::{GetUser, ListUsers};
use crate::app::{CommandHandler, QueryHandler};
use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::AppState;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateUser>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let user = state.user_service.execute(command).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListUsers>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    Ok(Json(state.user_service.fetch(query).await?))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, AppError> {
    let query = GetUser { id: UserId(id) };
    Ok(Json(state.user_service.fetch(query).await?))
}

/// GET /users/me
///
/// The account behind the bearer token.
pub async fn get_me(Extension(user): Extension<User>) -> Json<UserDto> {
    Json(user.into())
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Extension(current): Extension<User>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> Result<Json<UserDto>, AppError> {
    tracing::debug!(actor = %current.id, target = id, "Updating user");
    let command = UpdateUser {
        id: UserId(id),
        patch,
    };
    Ok(Json(state.user_service.execute(command).await?))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current): Extension<User>,
    Path(id): Path<i32>,
) -> Result<Json<MessageDto>, AppError> {
    tracing::debug!(actor = %current.id, target = id, "Deleting user");
    state
        .user_service
        .execute(DeleteUser { id: UserId(id) })
        .await?;
    Ok(Json(MessageDto::new("User deleted successfully")))
}
