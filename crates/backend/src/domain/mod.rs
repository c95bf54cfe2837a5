pub mod a002_product;
pub mod a005_coupon;
pub mod a006_earning;
