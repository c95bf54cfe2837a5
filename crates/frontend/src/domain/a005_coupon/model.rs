use contracts::domain::a005_coupon::{Coupon, CouponListData, CouponPayload};
use contracts::shared::PageQuery;

use crate::shared::api_utils::with_query;
use crate::shared::http::{self, Verb};

pub const PAGE_LIMIT: usize = 10;

fn coupon_path(id: &str) -> String {
    format!("/promoCode/{}", urlencoding::encode(id))
}

pub async fn fetch_coupons(page: usize) -> Result<CouponListData, String> {
    let path = with_query("/promocode", &PageQuery::new(page, PAGE_LIMIT));
    http::get_json::<CouponListData>(&path)
        .await
        .map_err(|e| e.message_or("Failed to fetch coupons"))
}

/// Create when `id` is `None`, otherwise update
pub async fn save_coupon(id: Option<&str>, payload: &CouponPayload) -> Result<Coupon, String> {
    match id {
        Some(id) => http::send_json::<_, Coupon>(Verb::Patch, &coupon_path(id), payload)
            .await
            .map_err(|e| e.message_or("Failed to update coupon")),
        None => http::send_json::<_, Coupon>(Verb::Post, "/promocode", payload)
            .await
            .map_err(|e| e.message_or("Failed to create coupon")),
    }
}

pub async fn delete_coupon(id: &str) -> Result<Option<String>, String> {
    http::delete(&coupon_path(id))
        .await
        .map_err(|e| e.message_or("Failed to delete coupon"))
}
