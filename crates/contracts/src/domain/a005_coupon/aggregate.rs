use crate::shared::{Pagination, ValidationError};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_USAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("fixed") {
            Self::Fixed
        } else {
            Self::Percentage
        }
    }
}

/// Promo code as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub usage_limit: u32,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub active: bool,
}

impl Coupon {
    pub fn matches(&self, search: &str) -> bool {
        self.code.to_lowercase().contains(&search.trim().to_lowercase())
    }

    pub fn discount_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", self.discount_value),
            DiscountType::Fixed => format!("${}", self.discount_value),
        }
    }

    pub fn expiry_label(&self) -> String {
        date_part(&self.expiry_date)
    }
}

fn date_part(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|d| d.with_timezone(&Utc).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| ts.split('T').next().unwrap_or_default().to_string())
}

/// Body of `POST /promocode` and `PATCH /promoCode/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub expiry_date: String,
    pub usage_limit: u32,
    pub active: bool,
}

/// Coupon form state; every field is raw input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponDraft {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    /// `YYYY-MM-DD` from a date input
    pub expiry_date: String,
    pub usage_limit: String,
}

impl CouponDraft {
    pub fn from_coupon(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount_type: coupon.discount_type,
            discount_value: coupon.discount_value.to_string(),
            expiry_date: coupon.expiry_label(),
            usage_limit: coupon.usage_limit.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<CouponPayload, ValidationError> {
        let code = self.code.trim();
        let value = self.discount_value.trim();
        let expiry = self.expiry_date.trim();
        if code.is_empty() || value.is_empty() || expiry.is_empty() {
            return Err(ValidationError::invalid("Please fill all fields"));
        }

        let discount_value = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| ValidationError::invalid("Discount value must be a positive number"))?;

        let expiry_date = NaiveDate::parse_from_str(expiry, "%Y-%m-%d")
            .map_err(|_| ValidationError::invalid("Invalid expiry date"))?
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
            .ok_or_else(|| ValidationError::invalid("Invalid expiry date"))?;

        // 0 или мусор -> лимит по умолчанию
        let usage_limit = self
            .usage_limit
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_USAGE_LIMIT);

        Ok(CouponPayload {
            code: code.to_uppercase(),
            discount_type: self.discount_type,
            discount_value,
            expiry_date,
            usage_limit,
            active: true,
        })
    }
}

/// `data` of `GET /promocode`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponListData {
    #[serde(default)]
    pub data: Vec<Coupon>,
    #[serde(default)]
    pub pagination: Pagination,
}
