use serde::{Deserialize, Serialize};

/// One month of the earnings history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarning {
    /// Display label, e.g. `Nov 2025`
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default, alias = "totalOrders")]
    pub orders: u64,
    #[serde(default, alias = "average", alias = "avgOrderValue", alias = "avg")]
    pub average_earnings: Option<f64>,
}

impl MonthlyEarning {
    /// Reported average, or total over orders when the backend omits it
    pub fn average(&self) -> f64 {
        match self.average_earnings {
            Some(avg) if avg.is_finite() => avg,
            _ if self.orders > 0 => self.total_earnings / self.orders as f64,
            _ => 0.0,
        }
    }

    /// Width of the progress bar, relative to the best month
    pub fn bar_percent(&self, peak: f64) -> f64 {
        if !(peak.is_finite() && peak > 0.0) {
            return 0.0;
        }
        (self.total_earnings / peak * 100.0).clamp(0.0, 100.0)
    }
}

/// `data` of `GET /vendor/earnings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub monthly_earnings: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub performance: Vec<MonthlyEarning>,
}

impl EarningsSummary {
    /// Highest monthly total, 0 for an empty history
    pub fn peak(&self) -> f64 {
        self.performance
            .iter()
            .map(|m| m.total_earnings)
            .fold(0.0, f64::max)
    }
}

/// `$1,234.50`; negative amounts get a leading minus
pub fn format_usd(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_labels_group_thousands() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(449.0), "$449.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-12.345), "-$12.35");
        assert_eq!(format_usd(f64::NAN), "$0.00");
    }

    #[test]
    fn month_fields_accept_alternate_names() {
        let m: MonthlyEarning =
            serde_json::from_str(r#"{"month":"Nov 2025","totalEarnings":300,"totalOrders":4,"avgOrderValue":75}"#)
                .unwrap();
        assert_eq!(m.orders, 4);
        assert_eq!(m.average(), 75.0);

        let m: MonthlyEarning =
            serde_json::from_str(r#"{"month":"Oct 2025","totalEarnings":90,"orders":3}"#).unwrap();
        assert_eq!(m.average(), 30.0);
        assert_eq!(MonthlyEarning::default().average(), 0.0);
    }

    #[test]
    fn bars_scale_against_the_best_month() {
        let summary: EarningsSummary = serde_json::from_str(
            r#"{"totalEarnings":400,"monthlyEarnings":100,"totalOrders":5,
                "performance":[{"month":"Jun 2024","totalEarnings":300},{"month":"May 2024","totalEarnings":100}]}"#,
        )
        .unwrap();
        let peak = summary.peak();
        assert_eq!(peak, 300.0);
        assert_eq!(summary.performance[0].bar_percent(peak), 100.0);
        assert!((summary.performance[1].bar_percent(peak) - 33.333).abs() < 0.01);
        assert_eq!(summary.performance[1].bar_percent(0.0), 0.0);
        assert_eq!(EarningsSummary::default().peak(), 0.0);
    }
}
