use axum::extract::{Json, State};
use contracts::domain::a007_subscription::SubscriptionPlan;
use contracts::shared::ApiResponse;

use crate::shared::data::store::AppState;
use crate::shared::error::ApiResult;

/// GET /subscription/get-all
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<SubscriptionPlan>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::ok(store.plans.clone())))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn plans_are_listed() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) = call(&router, Method::GET, "/subscription/get-all", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let plans = body["data"].as_array().unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0]["_id"], "plan-starter");
        assert_eq!(plans[1]["billingCycle"], "monthly");
        assert_eq!(plans[1]["usageLimits"]["maxProducts"], 500);
    }

    #[tokio::test]
    async fn empty_store_has_no_plans() {
        let (router, _) = app(false);
        let token = login_token(&router).await;
        let (_, body) = call(&router, Method::GET, "/subscription/get-all", Some(&token), None).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}
