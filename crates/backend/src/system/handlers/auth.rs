use axum::extract::{Json, State};
use contracts::shared::ApiResponse;
use contracts::system::auth::{
    validate_email, validate_login, validate_otp, ChangePasswordRequest, ForgotPasswordRequest,
    LoginData, LoginRequest, ResetPasswordRequest, VerifyCodeRequest, MIN_PASSWORD_LEN,
};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::data::store::AppState;
use crate::shared::error::{done, ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;

fn check_password_len(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request("Password must be at least 6 characters"));
    }
    Ok(())
}

/// 6-digit one-time code
fn generate_otp() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginData> {
    validate_login(&request.email, &request.password)?;

    let mut store = state.store.write().await;
    let account = store
        .account_by_email(&request.email)
        .filter(|a| a.password == request.password)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Invalid email or password"))?;

    let access_token = Uuid::new_v4().to_string();
    store
        .sessions
        .insert(access_token.clone(), account.user.id.clone());
    tracing::info!("User {} logged in", account.user.email);

    Ok(Json(ApiResponse::ok_with_message(
        LoginData {
            user: account.user,
            vendor: account.vendor,
            access_token,
        },
        "Login successful",
    )))
}

/// POST /auth/forget-password
pub async fn forget_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> ApiResult<Value> {
    validate_email(&request.email)?;
    let email = request.email.trim().to_lowercase();

    let mut store = state.store.write().await;
    if store.account_by_email(&email).is_none() {
        return Err(ApiError::not_found("User"));
    }
    let otp = generate_otp();
    // Письма не отправляем: код только в логе
    tracing::info!("OTP for {}: {}", email, otp);
    store.verified.remove(&email);
    store.otps.insert(email, otp);

    done("OTP sent to your email")
}

/// POST /auth/verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    Json(request): Json<VerifyCodeRequest>,
) -> ApiResult<Value> {
    validate_otp(&request.otp)?;
    let email = request.email.trim().to_lowercase();

    let mut store = state.store.write().await;
    let matches = store.otps.get(&email).is_some_and(|expected| *expected == request.otp);
    if !matches {
        return Err(ApiError::bad_request("Invalid or expired code"));
    }
    store.otps.remove(&email);
    store.verified.insert(email);
    done("Code verified")
}

/// POST /auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> ApiResult<Value> {
    check_password_len(&request.new_password)?;
    let email = request.email.trim().to_lowercase();

    let mut store = state.store.write().await;
    if !store.verified.remove(&email) {
        return Err(ApiError::bad_request("Please verify your email first"));
    }
    let account = store
        .account_by_email_mut(&email)
        .ok_or_else(|| ApiError::not_found("User"))?;
    account.password = request.new_password;
    tracing::info!("Password reset for {}", email);

    done("Password reset successfully")
}

/// POST /user/change-password
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Value> {
    check_password_len(&request.new_password)?;

    let mut store = state.store.write().await;
    let account = store
        .account_by_token_mut(&user.token)
        .ok_or(ApiError::Unauthorized)?;
    if account.password != request.old_password {
        return Err(ApiError::bad_request("Old password is incorrect"));
    }
    account.password = request.new_password;
    tracing::info!("Password changed for user {}", user.user_id);

    done("Password changed successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{app, call, login_token};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[test]
    fn otp_has_six_digits() {
        for _ in 0..50 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn login_returns_session_data() {
        let (router, _) = app(true);
        let (status, body) = call(
            &router,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({"email": "vendor@example.com", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], true);
        assert_eq!(body["data"]["vendor"]["storeId"], "store-1");
        assert!(body["data"]["accessToken"].as_str().is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_with_message() {
        let (router, _) = app(true);
        let (status, body) = call(
            &router,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({"email": "vendor@example.com", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn reset_flow_requires_verified_code() {
        let (router, state) = app(true);
        let email = "vendor@example.com";

        let (status, _) = call(&router, Method::POST, "/auth/reset-password", None,
            Some(json!({"email": email, "newPassword": "brandnew"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(&router, Method::POST, "/auth/forget-password", None,
            Some(json!({"email": email}))).await;
        assert_eq!(status, StatusCode::OK);
        let otp = state.store.read().await.otps.get(email).cloned().unwrap();

        let (status, body) = call(&router, Method::POST, "/auth/verify-code", None,
            Some(json!({"email": email, "otp": "12345"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter all 6 digits");

        let (status, _) = call(&router, Method::POST, "/auth/verify-code", None,
            Some(json!({"email": email, "otp": otp}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&router, Method::POST, "/auth/reset-password", None,
            Some(json!({"email": email, "newPassword": "brandnew"}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&router, Method::POST, "/auth/login", None,
            Some(json!({"email": email, "password": "brandnew"}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn change_password_checks_old_password() {
        let (router, _) = app(true);
        let token = login_token(&router).await;

        let (status, body) = call(&router, Method::POST, "/user/change-password", Some(&token),
            Some(json!({"oldPassword": "wrong", "newPassword": "another1"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Old password is incorrect");

        let (status, _) = call(&router, Method::POST, "/user/change-password", Some(&token),
            Some(json!({"oldPassword": "secret1", "newPassword": "another1"}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&router, Method::POST, "/user/change-password", None,
            Some(json!({"oldPassword": "another1", "newPassword": "third01"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
