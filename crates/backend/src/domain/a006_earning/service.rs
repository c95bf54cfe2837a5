use chrono::{DateTime, Datelike, NaiveDate, Utc};
use contracts::domain::a003_order::RawOrder;
use contracts::domain::a006_earning::{EarningsSummary, MonthlyEarning};
use std::collections::BTreeMap;

/// Cancelled and rejected orders earn nothing
fn earns(order: &RawOrder) -> bool {
    !matches!(
        order.order_status.trim().to_lowercase().as_str(),
        "cancelled" | "rejected"
    )
}

fn month_of(order: &RawOrder) -> Option<(i32, u32)> {
    let ts = order.created_at.as_deref()?;
    let date = DateTime::parse_from_rfc3339(ts).ok()?;
    Some((date.year(), date.month()))
}

fn month_label((year, month): (i32, u32)) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Totals over earning orders plus per-month history, newest month first.
///
/// Orders without a readable date count toward the totals only.
pub fn summarize(orders: &[RawOrder], now: DateTime<Utc>) -> EarningsSummary {
    let mut months: BTreeMap<(i32, u32), (f64, u64)> = BTreeMap::new();
    let mut summary = EarningsSummary::default();

    for order in orders.iter().filter(|o| earns(o)) {
        summary.total_earnings += order.amount;
        summary.total_orders += 1;
        if let Some(key) = month_of(order) {
            let entry = months.entry(key).or_default();
            entry.0 += order.amount;
            entry.1 += 1;
        }
    }

    summary.monthly_earnings = months
        .get(&(now.year(), now.month()))
        .map(|(total, _)| *total)
        .unwrap_or(0.0);

    summary.performance = months
        .into_iter()
        .rev()
        .map(|(key, (total, orders))| MonthlyEarning {
            month: month_label(key),
            total_earnings: total,
            orders,
            average_earnings: Some(total / orders as f64),
        })
        .collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(amount: f64, status: &str, created_at: Option<&str>) -> RawOrder {
        RawOrder {
            id: "o".into(),
            amount,
            order_status: status.into(),
            created_at: created_at.map(str::to_string),
            ..RawOrder::default()
        }
    }

    #[test]
    fn groups_by_month_and_skips_rejected() {
        let orders = vec![
            order(100.0, "completed", Some("2024-05-10T10:00:00Z")),
            order(50.0, "pending", Some("2024-06-01T09:00:00Z")),
            order(150.0, "accepted", Some("2024-06-20T09:00:00Z")),
            order(999.0, "Rejected", Some("2024-06-21T09:00:00Z")),
            order(20.0, "paid", None),
        ];
        let now = Utc.with_ymd_and_hms(2024, 6, 25, 0, 0, 0).unwrap();
        let s = summarize(&orders, now);

        assert_eq!(s.total_earnings, 320.0);
        assert_eq!(s.total_orders, 4);
        assert_eq!(s.monthly_earnings, 200.0);
        let months: Vec<_> = s.performance.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["Jun 2024", "May 2024"]);
        assert_eq!(s.performance[0].orders, 2);
        assert_eq!(s.performance[0].average(), 100.0);
    }

    #[test]
    fn quiet_current_month_earns_zero() {
        let orders = vec![order(100.0, "completed", Some("2024-05-10T10:00:00Z"))];
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let s = summarize(&orders, now);
        assert_eq!(s.monthly_earnings, 0.0);
        assert_eq!(s.performance.len(), 1);
        assert_eq!(summarize(&[], now), EarningsSummary::default());
    }
}
