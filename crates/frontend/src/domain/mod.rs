pub mod a001_category;
pub mod a002_product;
pub mod a003_order;
pub mod a004_customer;
pub mod a005_coupon;
pub mod a006_earning;
pub mod a007_subscription;
