use crate::shared::loose::opt_string;
use crate::shared::Pagination;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

/// Статусы, которые продавец может выставить заказу
pub const ORDER_STATUSES: [&str; 4] = ["completed", "pending", "accepted", "rejected"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderProductDetails {
    #[serde(default, deserialize_with = "opt_string")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBuyer {
    #[serde(default, deserialize_with = "opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Order as returned by `GET /vendor/orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_details: Option<OrderProductDetails>,
    #[serde(default)]
    pub buyer: Option<OrderBuyer>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Badge colour of an order status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Info,
    Danger,
    Neutral,
}

impl StatusTone {
    pub fn of(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "completed" | "paid" => Self::Success,
            "pending" => Self::Warning,
            "accepted" => Self::Info,
            "cancelled" | "rejected" => Self::Danger,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Info => "badge badge--info",
            Self::Danger => "badge badge--danger",
            Self::Neutral => "badge",
        }
    }
}

/// Table row of the orders page
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub product_title: String,
    pub customer_name: String,
    pub created_at: Option<String>,
    pub amount: f64,
    pub status: String,
}

impl From<&RawOrder> for OrderRow {
    fn from(raw: &RawOrder) -> Self {
        let or_na = |v: Option<&String>| {
            v.filter(|s| !s.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        Self {
            id: raw.id.clone(),
            product_title: or_na(raw.product_details.as_ref().and_then(|d| d.title.as_ref())),
            customer_name: or_na(raw.buyer.as_ref().and_then(|b| b.name.as_ref())),
            created_at: raw.created_at.clone(),
            amount: raw.amount,
            status: raw.order_status.clone(),
        }
    }
}

impl OrderRow {
    pub fn tone(&self) -> StatusTone {
        StatusTone::of(&self.status)
    }

    /// `YYYY-MM-DD` of an RFC 3339 timestamp, the raw text otherwise
    pub fn date_label(&self) -> String {
        match self.created_at.as_deref() {
            Some(ts) => DateTime::parse_from_rfc3339(ts)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|_| ts.to_string()),
            None => String::new(),
        }
    }

    pub fn amount_label(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

/// Local search and status filter over the loaded page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    /// `"all"` or one of [`ORDER_STATUSES`]
    pub status: String,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
        }
    }
}

impl OrderFilter {
    pub fn matches(&self, row: &OrderRow) -> bool {
        let search = self.search.trim().to_lowercase();
        let search_ok = search.is_empty()
            || row.product_title.to_lowercase().contains(&search)
            || row.customer_name.to_lowercase().contains(&search);
        let status_ok = self.status == "all" || row.status.eq_ignore_ascii_case(&self.status);
        search_ok && status_ok
    }

    pub fn apply<'a>(&self, rows: &'a [OrderRow]) -> Vec<&'a OrderRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// `data` of `GET /vendor/orders`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListData {
    #[serde(default)]
    pub orders: Vec<RawOrder>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `PATCH /vendor/:id/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_status: String,
}

impl UpdateOrderStatusRequest {
    pub fn new(status: &str) -> Result<Self, String> {
        let status = status.trim().to_lowercase();
        if ORDER_STATUSES.contains(&status.as_str()) {
            Ok(Self { order_status: status })
        } else {
            Err(format!("Unknown order status: {status}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<OrderRow> {
        let json = r#"{"orders":[
            {"_id":"o1","productDetails":{"title":"Pixel 9"},"buyer":{"name":"Ann Lee"},"amount":499,
             "orderStatus":"pending","createdAt":"2024-05-01T10:00:00.000Z"},
            {"_id":"o2","productDetails":null,"buyer":{"name":""},"amount":12.5,"orderStatus":"Completed"}
        ],"pagination":{"page":1,"limit":10,"total":2,"totalPages":1}}"#;
        let data: OrderListData = serde_json::from_str(json).unwrap();
        data.orders.iter().map(OrderRow::from).collect()
    }

    #[test]
    fn raw_orders_map_with_fallbacks() {
        let rows = rows();
        assert_eq!(rows[0].product_title, "Pixel 9");
        assert_eq!(rows[0].customer_name, "Ann Lee");
        assert_eq!(rows[0].date_label(), "2024-05-01");
        assert_eq!(rows[1].product_title, NOT_AVAILABLE);
        assert_eq!(rows[1].customer_name, NOT_AVAILABLE);
        assert_eq!(rows[1].date_label(), "");
        assert_eq!(rows[1].amount_label(), "$12.50");
    }

    #[test]
    fn search_and_status_filter() {
        let rows = rows();
        let mut filter = OrderFilter::default();
        assert_eq!(filter.apply(&rows).len(), 2);

        filter.search = "ann".into();
        assert_eq!(filter.apply(&rows).len(), 1);

        filter.search = "n/a".into();
        filter.status = "completed".into();
        let found = filter.apply(&rows);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "o2");

        filter.status = "rejected".into();
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn status_tones() {
        assert_eq!(StatusTone::of("Paid"), StatusTone::Success);
        assert_eq!(StatusTone::of("pending"), StatusTone::Warning);
        assert_eq!(StatusTone::of("accepted"), StatusTone::Info);
        assert_eq!(StatusTone::of("cancelled"), StatusTone::Danger);
        assert_eq!(StatusTone::of("shipped"), StatusTone::Neutral);
    }

    #[test]
    fn status_update_body() {
        let body = UpdateOrderStatusRequest::new(" Accepted ").unwrap();
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"orderStatus":"accepted"}"#);
        assert!(UpdateOrderStatusRequest::new("shipped").is_err());
    }
}
