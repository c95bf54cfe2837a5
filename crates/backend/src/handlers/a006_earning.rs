use axum::extract::{Json, State};
use chrono::Utc;
use contracts::domain::a006_earning::EarningsSummary;
use contracts::shared::ApiResponse;

use crate::domain::a006_earning::service;
use crate::shared::data::store::AppState;
use crate::shared::error::ApiResult;

/// GET /vendor/earnings
pub async fn summary(State(state): State<AppState>) -> ApiResult<EarningsSummary> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::ok(service::summarize(&store.orders, Utc::now()))))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn earnings_cover_seeded_orders() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) = call(&router, Method::GET, "/vendor/earnings", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalOrders"], 3);
        assert_eq!(body["data"]["totalEarnings"], 2698.0);
        assert_eq!(body["data"]["performance"][0]["month"], "Jun 2024");
        assert_eq!(body["data"]["performance"][0]["orders"], 3);
    }

    #[tokio::test]
    async fn earnings_need_a_token() {
        let (router, _) = app(true);
        let (status, _) = call(&router, Method::GET, "/vendor/earnings", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
