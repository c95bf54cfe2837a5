use contracts::system::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginData, LoginRequest, ResetPasswordRequest,
    Session, VerifyCodeRequest,
};

use crate::shared::http::{self, Verb};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<Session, String> {
    let request = LoginRequest { email, password };
    http::send_json::<_, LoginData>(Verb::Post, "/auth/login", &request)
        .await
        .map(Session::from_login)
        .map_err(|e| e.message_or("Login failed"))
}

/// Ask the backend to mail a one-time code
pub async fn forgot_password(email: String) -> Result<Option<String>, String> {
    let request = ForgotPasswordRequest { email };
    http::send_action(Verb::Post, "/auth/forget-password", &request)
        .await
        .map_err(|e| e.message_or("Failed to send verification code"))
}

pub async fn verify_code(email: String, otp: String) -> Result<Option<String>, String> {
    let request = VerifyCodeRequest { email, otp };
    http::send_action(Verb::Post, "/auth/verify-code", &request)
        .await
        .map_err(|e| e.message_or("Invalid verification code"))
}

pub async fn reset_password(email: String, new_password: String) -> Result<Option<String>, String> {
    let request = ResetPasswordRequest { email, new_password };
    http::send_action(Verb::Post, "/auth/reset-password", &request)
        .await
        .map_err(|e| e.message_or("Failed to reset password"))
}

pub async fn change_password(
    old_password: String,
    new_password: String,
) -> Result<Option<String>, String> {
    let request = ChangePasswordRequest {
        old_password,
        new_password,
    };
    http::send_action(Verb::Post, "/user/change-password", &request)
        .await
        .map_err(|e| e.message_or("Failed to change password"))
}
