use axum::extract::{Json, Query, State};
use contracts::domain::a004_customer::CustomerListData;
use contracts::shared::{ApiResponse, PageQuery};

use crate::shared::data::store::{page_of, AppState};
use crate::shared::error::ApiResult;

/// GET /vendor/customers
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<CustomerListData> {
    let store = state.store.read().await;
    let (customers, pagination) = page_of(&store.customers, query);
    Ok(Json(ApiResponse::ok(CustomerListData {
        customers,
        pagination,
    })))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn customers_list() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) = call(&router, Method::GET, "/vendor/customers", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["customers"][1]["email"], "bob@example.com");
        assert_eq!(body["data"]["customers"][0]["moneySpent"], 449.0);
    }

    #[tokio::test]
    async fn empty_store_has_single_empty_page() {
        let (router, _) = app(false);
        let token = login_token(&router).await;
        let (_, body) = call(&router, Method::GET, "/vendor/customers", Some(&token), None).await;
        assert!(body["data"]["customers"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["pagination"]["totalPages"], 1);
    }
}
