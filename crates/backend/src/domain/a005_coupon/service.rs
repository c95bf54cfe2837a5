use chrono::DateTime;
use contracts::domain::a005_coupon::{Coupon, CouponPayload};
use uuid::Uuid;

use crate::shared::data::store::Store;
use crate::shared::error::ApiError;

fn check(payload: &CouponPayload) -> Result<(), ApiError> {
    if payload.code.trim().is_empty() {
        return Err(ApiError::bad_request("Coupon code is required"));
    }
    if !(payload.discount_value.is_finite() && payload.discount_value > 0.0) {
        return Err(ApiError::bad_request("Discount value must be a positive number"));
    }
    DateTime::parse_from_rfc3339(&payload.expiry_date)
        .map_err(|_| ApiError::bad_request("Invalid expiry date"))?;
    Ok(())
}

/// Codes are unique ignoring case
fn ensure_unique(store: &Store, code: &str, except_id: Option<&str>) -> Result<(), ApiError> {
    let taken = store
        .coupons
        .iter()
        .filter(|c| Some(c.id.as_str()) != except_id)
        .any(|c| c.code.eq_ignore_ascii_case(code.trim()));
    if taken {
        return Err(ApiError::Conflict("Coupon code already exists".to_string()));
    }
    Ok(())
}

pub fn create(store: &mut Store, payload: CouponPayload) -> Result<Coupon, ApiError> {
    check(&payload)?;
    ensure_unique(store, &payload.code, None)?;

    let coupon = Coupon {
        id: format!("cpn-{}", Uuid::new_v4().simple()),
        code: payload.code.trim().to_uppercase(),
        discount_type: payload.discount_type,
        discount_value: payload.discount_value,
        expiry_date: payload.expiry_date,
        usage_limit: payload.usage_limit,
        used_count: 0,
        active: payload.active,
    };
    tracing::info!("Coupon {} created", coupon.code);
    store.coupons.push(coupon.clone());
    Ok(coupon)
}

/// Used count survives edits
pub fn update(store: &mut Store, id: &str, payload: CouponPayload) -> Result<Coupon, ApiError> {
    check(&payload)?;
    ensure_unique(store, &payload.code, Some(id))?;

    let coupon = store
        .coupons
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::not_found("Coupon"))?;
    coupon.code = payload.code.trim().to_uppercase();
    coupon.discount_type = payload.discount_type;
    coupon.discount_value = payload.discount_value;
    coupon.expiry_date = payload.expiry_date;
    coupon.usage_limit = payload.usage_limit;
    coupon.active = payload.active;
    tracing::info!("Coupon {} updated", coupon.code);
    Ok(coupon.clone())
}

pub fn delete(store: &mut Store, id: &str) -> Result<(), ApiError> {
    let before = store.coupons.len();
    store.coupons.retain(|c| c.id != id);
    if store.coupons.len() == before {
        return Err(ApiError::not_found("Coupon"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::build_store;
    use contracts::domain::a005_coupon::CouponDraft;

    fn payload(code: &str) -> CouponPayload {
        CouponDraft {
            code: code.into(),
            discount_value: "15".into(),
            expiry_date: "2031-01-15".into(),
            ..CouponDraft::default()
        }
        .to_payload()
        .unwrap()
    }

    #[test]
    fn duplicate_codes_conflict_regardless_of_case() {
        let mut store = build_store(true);
        let err = create(&mut store, payload("welcome10")).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        let created = create(&mut store, payload("spring15")).unwrap();
        assert_eq!(created.code, "SPRING15");
        assert_eq!(created.used_count, 0);
    }

    #[test]
    fn update_keeps_used_count_and_allows_own_code() {
        let mut store = build_store(true);
        let mut p = payload("WELCOME10");
        p.discount_value = 12.0;
        let updated = update(&mut store, "cpn-1", p).unwrap();
        assert_eq!(updated.discount_value, 12.0);
        assert_eq!(updated.used_count, 4);

        delete(&mut store, "cpn-1").unwrap();
        assert!(matches!(delete(&mut store, "cpn-1"), Err(ApiError::NotFound(_))));
    }
}
