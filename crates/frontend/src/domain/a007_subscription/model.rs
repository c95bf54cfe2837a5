use contracts::domain::a007_subscription::SubscriptionPlan;

use crate::shared::http;

pub async fn fetch_plans() -> Result<Vec<SubscriptionPlan>, String> {
    http::get_json::<Vec<SubscriptionPlan>>("/subscription/get-all")
        .await
        .map(SubscriptionPlan::sorted_for_display)
        .map_err(|e| e.message_or("Failed to fetch subscription plans"))
}
