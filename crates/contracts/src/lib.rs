//! Shared contracts between the vendor dashboard frontend and the REST backend.
//!
//! - `domain`: category taxonomy, products, orders, customers, coupons,
//!   earnings, subscription plans
//! - `shared`: response envelope, error taxonomy, multipart payload model
//! - `system`: authentication and session types

pub mod domain;
pub mod shared;
pub mod system;
