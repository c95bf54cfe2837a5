pub mod aggregate;

pub use aggregate::{SubscriptionPlan, UsageLimits};
