use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::extractor::AuthUser;
use crate::shared::data::store::AppState;
use crate::shared::error::ApiError;

/// Middleware that requires a valid bearer token issued by `/auth/login`
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or(ApiError::Unauthorized)?;

    let user_id = state
        .store
        .read()
        .await
        .sessions
        .get(&token)
        .cloned()
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(AuthUser { user_id, token });

    Ok(next.run(req).await)
}
