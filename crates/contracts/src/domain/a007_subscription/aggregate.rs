use serde::{Deserialize, Serialize};

/// Per-plan caps; a missing cap means unlimited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLimits {
    #[serde(default)]
    pub max_products: Option<u32>,
    #[serde(default)]
    pub max_stores: Option<u32>,
    #[serde(default)]
    pub max_users: Option<u32>,
}

impl UsageLimits {
    pub fn lines(&self) -> Vec<String> {
        [
            ("products", self.max_products),
            ("stores", self.max_stores),
            ("users", self.max_users),
        ]
        .into_iter()
        .map(|(what, cap)| match cap {
            Some(1) => format!("Up to 1 {}", what.trim_end_matches('s')),
            Some(n) => format!("Up to {n} {what}"),
            None => format!("Unlimited {what}"),
        })
        .collect()
    }
}

/// Item of `GET /subscription/get-all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    /// `monthly`, `yearly`, `custom` or `N/A`
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub trial_period_days: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub usage_limits: Option<UsageLimits>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub custom_duration_days: Option<u32>,
}

impl SubscriptionPlan {
    /// Billing period for the price line; custom plans show their length
    pub fn period(&self) -> String {
        match self.billing_cycle.trim().to_lowercase().as_str() {
            "monthly" => "month".to_string(),
            "yearly" => "year".to_string(),
            "custom" => match self.custom_duration_days {
                Some(days) => format!("{days} days"),
                None => "custom period".to_string(),
            },
            _ => String::new(),
        }
    }

    /// `USD 49.00 / month`; plans without a cycle show the price alone
    pub fn price_label(&self) -> String {
        let currency = match self.currency.trim() {
            "" => "USD",
            other => other,
        };
        let price = format!("{} {:.2}", currency.to_uppercase(), self.price);
        match self.period().as_str() {
            "" => price,
            period => format!("{price} / {period}"),
        }
    }

    pub fn trial_label(&self) -> Option<String> {
        match self.trial_period_days {
            Some(days) if days > 0 => Some(format!("{days}-day free trial")),
            _ => None,
        }
    }

    /// Active plans first; ties keep the backend order
    pub fn sorted_for_display(mut plans: Vec<SubscriptionPlan>) -> Vec<SubscriptionPlan> {
        plans.sort_by_key(|p| !p.is_active);
        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(json: &str) -> SubscriptionPlan {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn price_line_follows_billing_cycle() {
        let monthly = plan(r#"{"_id":"p1","name":"Basic","price":9.5,"currency":"usd","billingCycle":"monthly"}"#);
        assert_eq!(monthly.price_label(), "USD 9.50 / month");

        let custom = plan(r#"{"_id":"p2","price":100,"currency":"EUR","billingCycle":"custom","customDurationDays":90}"#);
        assert_eq!(custom.price_label(), "EUR 100.00 / 90 days");

        let free = plan(r#"{"_id":"p3","price":0,"billingCycle":"N/A"}"#);
        assert_eq!(free.price_label(), "USD 0.00");
    }

    #[test]
    fn limits_and_trial_lines() {
        let p = plan(
            r#"{"_id":"p1","trialPeriodDays":14,"usageLimits":{"maxProducts":50,"maxStores":1},"features":["Analytics"]}"#,
        );
        assert_eq!(p.trial_label().as_deref(), Some("14-day free trial"));
        assert_eq!(
            p.usage_limits.unwrap().lines(),
            vec!["Up to 50 products", "Up to 1 store", "Unlimited users"]
        );
        assert_eq!(plan(r#"{"_id":"p2","trialPeriodDays":0}"#).trial_label(), None);
    }

    #[test]
    fn active_plans_come_first() {
        let plans = vec![
            plan(r#"{"_id":"a","isActive":false}"#),
            plan(r#"{"_id":"b","isActive":true}"#),
            plan(r#"{"_id":"c","isActive":true}"#),
        ];
        let ids: Vec<_> = SubscriptionPlan::sorted_for_display(plans)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
