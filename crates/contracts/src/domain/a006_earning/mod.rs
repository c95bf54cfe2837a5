pub mod aggregate;

pub use aggregate::{format_usd, EarningsSummary, MonthlyEarning};
