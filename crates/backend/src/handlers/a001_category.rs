use axum::extract::{Json, Query, State};
use contracts::domain::a001_category::CategoryListData;
use contracts::domain::a002_product::DocRef;
use contracts::shared::{ApiResponse, PageQuery};

use crate::shared::data::store::{page_of, AppState};
use crate::shared::error::ApiResult;

/// GET /category
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<CategoryListData> {
    let store = state.store.read().await;
    let (mut categories, _) = page_of(&store.categories, query);

    for category in &mut categories {
        category.product_count = store
            .products
            .iter()
            .filter(|p| p.category.as_ref().map(DocRef::id) == Some(category.id.as_str()))
            .count() as u64;
    }

    Ok(Json(ApiResponse::ok(CategoryListData { categories })))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn categories_carry_product_counts() {
        let (router, _) = app(true);
        let token = login_token(&router).await;
        let (status, body) =
            call(&router, Method::GET, "/category?page=1&limit=50", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let categories = body["data"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0]["mainCategory"], "General Goods");
        assert_eq!(categories[0]["productCount"], 1);
        assert_eq!(categories[2]["productCount"], 0);
        assert_eq!(
            categories[0]["subCategories"][0]["childCategories"][0]["_id"],
            "child-phones"
        );
    }

    #[tokio::test]
    async fn requires_token() {
        let (router, _) = app(true);
        let (status, body) = call(&router, Method::GET, "/category", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], false);
    }
}
