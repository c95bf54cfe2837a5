use axum::extract::{Json, Path, Query, State};
use contracts::domain::a005_coupon::{Coupon, CouponListData, CouponPayload};
use contracts::shared::{ApiResponse, PageQuery};
use serde_json::Value;

use crate::domain::a005_coupon::service;
use crate::shared::data::store::{page_of, AppState};
use crate::shared::error::{done, ApiResult};

/// GET /promocode
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<CouponListData> {
    let store = state.store.read().await;
    let (data, pagination) = page_of(&store.coupons, query);
    Ok(Json(ApiResponse::ok(CouponListData { data, pagination })))
}

/// POST /promocode
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CouponPayload>,
) -> ApiResult<Coupon> {
    let mut store = state.store.write().await;
    let coupon = service::create(&mut store, payload)?;
    Ok(Json(ApiResponse::ok_with_message(coupon, "Coupon created successfully")))
}

/// PATCH /promoCode/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CouponPayload>,
) -> ApiResult<Coupon> {
    let mut store = state.store.write().await;
    let coupon = service::update(&mut store, &id, payload)?;
    Ok(Json(ApiResponse::ok_with_message(coupon, "Coupon updated successfully")))
}

/// DELETE /promoCode/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let mut store = state.store.write().await;
    service::delete(&mut store, &id)?;
    done("Coupon deleted successfully")
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn coupon_lifecycle() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let body = json!({
            "code": "AUTUMN5",
            "discountType": "fixed",
            "discountValue": 5.0,
            "expiryDate": "2031-10-01T00:00:00.000Z",
            "usageLimit": 100,
            "active": true
        });

        let (status, created) =
            call(&router, Method::POST, "/promocode", Some(&token), Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["data"]["_id"].as_str().unwrap().to_string();

        let (status, dup) = call(&router, Method::POST, "/promocode", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(dup["message"], "Coupon code already exists");

        let (status, list) = call(&router, Method::GET, "/promocode?page=1&limit=10", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["data"]["data"].as_array().unwrap().len(), 2);

        let (status, updated) = call(&router, Method::PATCH, &format!("/promoCode/{id}"), Some(&token),
            Some(json!({
                "code": "AUTUMN7",
                "discountType": "fixed",
                "discountValue": 7.0,
                "expiryDate": "2031-10-01T00:00:00.000Z",
                "usageLimit": 50,
                "active": true
            }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["data"]["code"], "AUTUMN7");

        let (status, _) = call(&router, Method::DELETE, &format!("/promoCode/{id}"), Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_expiry_is_rejected() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) = call(&router, Method::POST, "/promocode", Some(&token), Some(json!({
            "code": "X1", "discountType": "percentage", "discountValue": 10.0,
            "expiryDate": "tomorrow", "usageLimit": 100, "active": true
        }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid expiry date");
    }
}
