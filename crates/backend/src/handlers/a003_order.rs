use axum::extract::{Json, Path, Query, State};
use contracts::domain::a003_order::{OrderListData, RawOrder, UpdateOrderStatusRequest};
use contracts::shared::{ApiResponse, PageQuery};

use crate::shared::data::store::{page_of, AppState};
use crate::shared::error::{ApiError, ApiResult};

/// GET /vendor/orders
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<OrderListData> {
    let store = state.store.read().await;
    let (orders, pagination) = page_of(&store.orders, query);
    Ok(Json(ApiResponse::ok(OrderListData { orders, pagination })))
}

/// PATCH /vendor/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> ApiResult<RawOrder> {
    let request = UpdateOrderStatusRequest::new(&request.order_status).map_err(ApiError::BadRequest)?;

    let mut store = state.store.write().await;
    let order = store
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| ApiError::not_found("Order"))?;
    order.order_status = request.order_status;
    tracing::info!("Order {} -> {}", order.id, order.order_status);

    Ok(Json(ApiResponse::ok_with_message(
        order.clone(),
        "Order status updated",
    )))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn orders_are_paginated() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) =
            call(&router, Method::GET, "/vendor/orders?page=2&limit=2", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["orders"][0]["_id"], "ord-3");
        assert_eq!(body["data"]["pagination"]["total"], 3);
    }

    #[tokio::test]
    async fn status_update_accepts_known_statuses_only() {
        let (router, state) = app(true);
        let token = login_token(&router).await;

        let (status, body) = call(&router, Method::PATCH, "/vendor/ord-1/status", Some(&token),
            Some(json!({"orderStatus": "Accepted"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["orderStatus"], "accepted");
        assert_eq!(state.store.read().await.orders[0].order_status, "accepted");

        let (status, body) = call(&router, Method::PATCH, "/vendor/ord-1/status", Some(&token),
            Some(json!({"orderStatus": "shipped"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Unknown order status: shipped");

        let (status, _) = call(&router, Method::PATCH, "/vendor/ord-9/status", Some(&token),
            Some(json!({"orderStatus": "pending"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
