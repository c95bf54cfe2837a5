use contracts::domain::a006_earning::EarningsSummary;

use crate::shared::http;

pub async fn fetch_earnings() -> Result<EarningsSummary, String> {
    http::get_json::<EarningsSummary>("/vendor/earnings")
        .await
        .map_err(|e| e.message_or("Failed to fetch earnings"))
}
