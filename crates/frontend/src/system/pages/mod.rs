pub mod account;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod verify_code;

/// `?email=` value for the password-reset steps
pub(crate) fn email_query(email: &str) -> String {
    format!("email={}", urlencoding::encode(email.trim()))
}

#[cfg(test)]
mod tests {
    use super::email_query;

    #[test]
    fn email_is_url_encoded() {
        assert_eq!(email_query(" vendor+1@example.com "), "email=vendor%2B1%40example.com");
    }
}
