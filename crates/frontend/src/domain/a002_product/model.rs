use contracts::domain::a002_product::{Product, ProductListData, ProductListQuery};

use crate::shared::api_utils::with_query;
use crate::shared::http;

/// Products per server page
pub const PAGE_LIMIT: usize = 10;

pub async fn fetch_products(query: &ProductListQuery) -> Result<ProductListData, String> {
    let path = with_query("/vendor/get-all-products", query);
    http::get_json::<ProductListData>(&path)
        .await
        .map_err(|e| e.message_or("Failed to fetch products"))
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    http::get_json::<Product>(&format!("/product/{}", urlencoding::encode(id)))
        .await
        .map_err(|e| e.message_or("Failed to fetch product"))
}

pub async fn delete_product(id: &str) -> Result<Option<String>, String> {
    http::delete(&format!("/product/{}", urlencoding::encode(id)))
        .await
        .map_err(|e| e.message_or("Failed to delete product"))
}
