//! Bearer token authentication middleware

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::AppState;

/// Extract the token from the Authorization header
fn extract_bearer(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Authentication middleware
///
/// Verifies the access token and injects the active `User` into request
/// extensions. Inactive accounts are turned away with 400.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(&request)
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let user = state.auth_service.authenticate(&token).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
