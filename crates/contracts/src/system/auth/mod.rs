use crate::domain::a002_product::DocRef;
use crate::shared::ValidationError;
use serde::{Deserialize, Serialize};

pub const OTP_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// ============================================================================
// Login response
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<DocRef>,
}

impl VendorRecord {
    fn store_id(&self) -> Option<&str> {
        self.store_id
            .as_deref()
            .or_else(|| self.store.as_ref().map(DocRef::id))
            .filter(|s| !s.is_empty())
    }
}

/// `data` of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: UserRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<VendorRecord>,
    pub access_token: String,
}

/// What the dashboard keeps after a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub image: Option<String>,
    pub store_id: Option<String>,
}

impl Session {
    /// Store id comes from the vendor record, else from the user record, else none
    pub fn from_login(data: LoginData) -> Self {
        let store_id = data
            .vendor
            .as_ref()
            .and_then(VendorRecord::store_id)
            .map(str::to_string)
            .or_else(|| data.user.store_id.clone().filter(|s| !s.is_empty()));
        Self {
            access_token: data.access_token,
            user_id: data.user.id,
            name: data.user.name,
            email: data.user.email,
            role: data.user.role,
            image: data.user.profile_image,
            store_id,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::invalid("Please enter your email"));
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::invalid("Please enter a valid email")),
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if email.trim().is_empty() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// OTP is exactly six digits
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::invalid("Please enter all 6 digits"))
    }
}

/// Match is checked before length
pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), ValidationError> {
    if new_password != confirm {
        return Err(ValidationError::invalid("Passwords do not match"));
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::invalid("Password must be at least 6 characters"));
    }
    Ok(())
}

pub fn validate_change_password(old: &str, new_password: &str, confirm: &str) -> Result<(), ValidationError> {
    if old.is_empty() {
        return Err(ValidationError::MissingFields(vec!["oldPassword"]));
    }
    validate_new_password(new_password, confirm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(json: &str) -> LoginData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn store_id_prefers_vendor_record() {
        let data = login(
            r#"{"user":{"_id":"u1","name":"Ann","email":"a@x.io","storeId":"from-user"},
                "vendor":{"_id":"v1","storeId":"from-vendor"},"accessToken":"t"}"#,
        );
        assert_eq!(Session::from_login(data).store_id.as_deref(), Some("from-vendor"));

        let data = login(
            r#"{"user":{"_id":"u1","email":"a@x.io"},"vendor":{"_id":"v1","store":{"_id":"st7"}},"accessToken":"t"}"#,
        );
        assert_eq!(Session::from_login(data).store_id.as_deref(), Some("st7"));
    }

    #[test]
    fn store_id_falls_back_to_user_then_none() {
        let data = login(
            r#"{"user":{"_id":"u1","email":"a@x.io","storeId":"from-user"},"vendor":{"_id":"v1"},"accessToken":"t"}"#,
        );
        assert_eq!(Session::from_login(data).store_id.as_deref(), Some("from-user"));

        let data = login(r#"{"user":{"_id":"u1","email":"a@x.io"},"accessToken":"t"}"#);
        let session = Session::from_login(data);
        assert_eq!(session.store_id, None);
        assert_eq!(session.display_name(), "a@x.io");
        assert_eq!(session.access_token, "t");
    }

    #[test]
    fn otp_must_be_six_digits() {
        assert!(validate_otp("123456").is_ok());
        for bad in ["12345", "1234567", "12345a", "", "12 456"] {
            assert_eq!(
                validate_otp(bad).unwrap_err().to_string(),
                "Please enter all 6 digits"
            );
        }
    }

    #[test]
    fn password_rules_check_match_first() {
        assert_eq!(
            validate_new_password("abc", "abd").unwrap_err().to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            validate_new_password("abc", "abc").unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );
        assert!(validate_new_password("secret1", "secret1").is_ok());
        assert!(validate_change_password("", "secret1", "secret1").is_err());
        assert!(validate_change_password("old", "secret1", "secret1").is_ok());
    }

    #[test]
    fn email_and_login_checks() {
        assert!(validate_email("vendor@example.com").is_ok());
        assert!(validate_email("vendor").is_err());
        assert!(validate_email(" ").is_err());
        assert_eq!(
            validate_login("", "").unwrap_err().missing_fields(),
            &["email", "password"]
        );
    }

    #[test]
    fn request_bodies_use_backend_names() {
        let body = serde_json::to_value(ResetPasswordRequest {
            email: "a@x.io".into(),
            new_password: "secret1".into(),
        })
        .unwrap();
        assert_eq!(body["newPassword"], "secret1");
        let body = serde_json::to_value(ChangePasswordRequest {
            old_password: "a".into(),
            new_password: "b".into(),
        })
        .unwrap();
        assert_eq!(body["oldPassword"], "a");
    }
}
