pub mod aggregate;

pub use aggregate::{
    Coupon, CouponDraft, CouponListData, CouponPayload, DiscountType, DEFAULT_USAGE_LIMIT,
};
