use contracts::domain::a004_customer::CustomerListData;
use contracts::shared::PageQuery;

use crate::shared::api_utils::with_query;
use crate::shared::http;

pub const PAGE_LIMIT: usize = 10;

pub async fn fetch_customers(page: usize) -> Result<CustomerListData, String> {
    let path = with_query("/vendor/customers", &PageQuery::new(page, PAGE_LIMIT));
    http::get_json::<CustomerListData>(&path)
        .await
        .map_err(|e| e.message_or("Failed to fetch customers"))
}
