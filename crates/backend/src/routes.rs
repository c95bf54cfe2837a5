use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::shared::data::store::AppState;
use crate::{handlers, system};

/// Multipart product forms carry an image
const UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    // ========================================
    // PUBLIC ROUTES
    // ========================================
    let public = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/auth/login", post(system::handlers::auth::login))
        .route(
            "/auth/forget-password",
            post(system::handlers::auth::forget_password),
        )
        .route("/auth/verify-code", post(system::handlers::auth::verify_code))
        .route(
            "/auth/reset-password",
            post(system::handlers::auth::reset_password),
        )
        .route("/uploads/:name", get(handlers::uploads::get));

    // ========================================
    // VENDOR ROUTES (bearer token)
    // ========================================
    let protected = Router::new()
        .route(
            "/user/change-password",
            post(system::handlers::auth::change_password),
        )
        // A001 Category
        .route("/category", get(handlers::a001_category::list))
        // A002 Product
        .route(
            "/vendor/get-all-products",
            get(handlers::a002_product::list),
        )
        .route("/product", post(handlers::a002_product::create))
        .route(
            "/product/:id",
            get(handlers::a002_product::get_by_id)
                .put(handlers::a002_product::update)
                .delete(handlers::a002_product::delete),
        )
        // A003 Order
        .route("/vendor/orders", get(handlers::a003_order::list))
        .route(
            "/vendor/:id/status",
            patch(handlers::a003_order::update_status),
        )
        // A004 Customer
        .route("/vendor/customers", get(handlers::a004_customer::list))
        // A005 Coupon
        .route(
            "/promocode",
            get(handlers::a005_coupon::list).post(handlers::a005_coupon::create),
        )
        .route(
            "/promoCode/:id",
            patch(handlers::a005_coupon::update).delete(handlers::a005_coupon::delete),
        )
        // A006 Earning
        .route("/vendor/earnings", get(handlers::a006_earning::summary))
        // A007 Subscription
        .route(
            "/subscription/get-all",
            get(handlers::a007_subscription::list),
        )
        .route_layer(DefaultBodyLimit::max(UPLOAD_LIMIT))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_auth,
        ));

    public.merge(protected).with_state(state)
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, call};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn health_is_public() {
        let (router, _) = app(false);
        let (status, _) = call(&router, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let (router, _) = app(true);
        let (status, body) =
            call(&router, Method::GET, "/vendor/orders", Some("stale-token"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized");
    }
}
