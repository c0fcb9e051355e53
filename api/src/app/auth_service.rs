//! Authentication service
//!
//! Exchanges credentials for access tokens and resolves bearer tokens back
//! to users.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::commands::Login;
use super::dispatch::CommandHandler;
use super::dto::TokenDto;
use crate::auth::{verify_password, TokenKeys};
use crate::domain::entities::User;
use crate::domain::ports::UserRepository;
use crate::error::AppError;

pub struct AuthService<R>
where
    R: UserRepository + ?Sized,
{
    users: Arc<R>,
    keys: TokenKeys,
}

impl<R> AuthService<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(users: Arc<R>, keys: TokenKeys) -> Self {
        Self { users, keys }
    }

    /// Resolve a bearer token to an active user
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.keys.verify(token, Utc::now()).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            AppError::Unauthorized
        })?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }
        Ok(user)
    }
}

#[async_trait]
impl<R> CommandHandler<Login> for AuthService<R>
where
    R: UserRepository + ?Sized,
{
    type Output = TokenDto;

    async fn execute(&self, command: Login) -> Result<TokenDto, AppError> {
        let user = self
            .users
            .find_by_username(&command.username)
            .await?
            .filter(|u| verify_password(&command.password, &u.hashed_password))
            .ok_or(AppError::Unauthorized)?;

        let access_token = self
            .keys
            .issue(&user.username, Utc::now())
            .map_err(|e| AppError::Internal(format!("Failed to issue token: {}", e)))?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(TokenDto {
            access_token,
            token_type: "bearer",
            user: user.into(),
        })
    }
}
