//! Login handlers
//!
//! `/token` takes an OAuth2-style password form, `/login` takes the same
//! credentials as query parameters. Both answer with a bearer token.

use axum::{extract::State, Json};

use super::extract::{ValidatedForm, ValidatedQuery};
use crate::app::commands::Login;
use crate::app::dto::TokenDto;
use crate::app::CommandHandler;
use crate::error::AppError;
use crate::AppState;

/// POST /token
pub async fn token(
    State(state): State<AppState>,
    ValidatedForm(command): ValidatedForm<Login>,
) -> Result<Json<TokenDto>, AppError> {
    Ok(Json(state.auth_service.execute(command).await?))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedQuery(command): ValidatedQuery<Login>,
) -> Result<Json<TokenDto>, AppError> {
    Ok(Json(state.auth_service.execute(command).await?))
}
