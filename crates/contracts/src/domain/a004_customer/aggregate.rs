use crate::shared::Pagination;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Покупатель магазина продавца
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub money_spent: f64,
    #[serde(default)]
    pub last_order_date: Option<String>,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub store_address: String,
}

impl Customer {
    /// Case-insensitive match on name or email
    pub fn matches(&self, search: &str) -> bool {
        let search = search.trim().to_lowercase();
        search.is_empty()
            || self.name.to_lowercase().contains(&search)
            || self.email.to_lowercase().contains(&search)
    }

    pub fn last_order_label(&self) -> String {
        match self.last_order_date.as_deref() {
            Some(ts) => DateTime::parse_from_rfc3339(ts)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|_| ts.to_string()),
            None => "-".to_string(),
        }
    }
}

/// `data` of `GET /vendor/customers`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerListData {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_covers_name_and_email() {
        let c: Customer = serde_json::from_str(
            r#"{"_id":"u1","name":"Ann Lee","email":"ann@shop.io","totalOrders":3,"moneySpent":120.5,
                "lastOrderDate":"2024-02-03T08:00:00Z","storeName":"Ann's"}"#,
        )
        .unwrap();
        assert!(c.matches(""));
        assert!(c.matches("LEE"));
        assert!(c.matches("shop.io"));
        assert!(!c.matches("bob"));
        assert_eq!(c.last_order_label(), "2024-02-03");
        assert_eq!(Customer::default().last_order_label(), "-");
    }
}
