//! Error taxonomy for form submission
//!
//! `ValidationError` never reaches the network; `RequestError` covers
//! everything that happens after a request was attempted.

use thiserror::Error;

/// Local form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required fields left blank, in form order
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Field present but malformed
    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Names of the missing required fields (empty for `Invalid`)
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields(fields) => fields,
            Self::Invalid(_) => &[],
        }
    }
}

/// Network or backend failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Backend answered with an error and a human-readable message
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Backend answered with an error but no usable message
    #[error("HTTP {0}")]
    Status(u16),

    /// Session rejected by the backend (401)
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// Request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Message to show the user: the backend's own message verbatim when
    /// there is one, otherwise the caller's fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Backend { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Build from a non-2xx response body
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match super::envelope::extract_message(body) {
            Some(message) => Self::Backend { status, message },
            None => Self::Status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_fields() {
        let err = ValidationError::MissingFields(vec!["title", "category"]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: title, category"
        );
        assert_eq!(err.missing_fields(), &["title", "category"]);
    }

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = RequestError::from_response(400, r#"{"status":false,"message":"Title taken"}"#);
        assert_eq!(err.message_or("Something went wrong"), "Title taken");
    }

    #[test]
    fn missing_message_falls_back() {
        let err = RequestError::from_response(500, "<html>oops</html>");
        assert_eq!(err, RequestError::Status(500));
        assert_eq!(err.message_or("Failed to update product"), "Failed to update product");

        let err = RequestError::Transport("connection refused".into());
        assert_eq!(err.message_or("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn unauthorized_is_recognised() {
        let err = RequestError::from_response(401, r#"{"message":"jwt expired"}"#);
        assert_eq!(err, RequestError::Unauthorized);
    }
}
