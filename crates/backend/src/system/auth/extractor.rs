use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::shared::error::ApiError;

/// Authenticated caller, inserted by `require_auth`
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub token: String,
}

/// Usage in handlers: `async fn handler(CurrentUser(user): CurrentUser)`
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized)
    }
}
