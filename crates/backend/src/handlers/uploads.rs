use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::shared::data::store::AppState;
use crate::shared::error::ApiError;

/// GET /uploads/:name
///
/// Public: `<img>` tags cannot send the bearer token.
pub async fn get(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response, ApiError> {
    let store = state.store.read().await;
    let upload = store
        .uploads
        .get(&name)
        .cloned()
        .ok_or_else(|| ApiError::not_found("File"))?;
    Ok(([(header::CONTENT_TYPE, upload.content_type)], upload.bytes).into_response())
}
