use contracts::domain::a003_order::{OrderListData, RawOrder, UpdateOrderStatusRequest};
use contracts::shared::PageQuery;

use crate::shared::api_utils::with_query;
use crate::shared::http::{self, Verb};

pub const PAGE_LIMIT: usize = 10;

pub async fn fetch_orders(page: usize) -> Result<OrderListData, String> {
    let path = with_query("/vendor/orders", &PageQuery::new(page, PAGE_LIMIT));
    http::get_json::<OrderListData>(&path)
        .await
        .map_err(|e| e.message_or("Failed to fetch orders"))
}

pub async fn update_status(id: &str, status: &str) -> Result<RawOrder, String> {
    let request = UpdateOrderStatusRequest::new(status)?;
    http::send_json::<_, RawOrder>(
        Verb::Patch,
        &format!("/vendor/{}/status", urlencoding::encode(id)),
        &request,
    )
    .await
    .map_err(|e| e.message_or("Failed to update order status"))
}
