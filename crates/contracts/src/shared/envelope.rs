//! Response envelope used by every backend endpoint
//!
//! ```json
//! { "status": true, "message": "OK", "data": { ... } }
//! ```

use super::errors::RequestError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Unwrap the payload of a 2xx response.
    ///
    /// A `status: false` envelope is an error even when the HTTP status was 2xx.
    pub fn into_data(self, http_status: u16) -> Result<T, RequestError> {
        self.into_optional(http_status)?
            .ok_or_else(|| RequestError::Decode("response has no data".into()))
    }

    /// Like [`into_data`](Self::into_data) for endpoints that may answer without `data`
    pub fn into_optional(self, http_status: u16) -> Result<Option<T>, RequestError> {
        if !self.status {
            return Err(match non_empty(self.message) {
                Some(message) => RequestError::Backend {
                    status: http_status,
                    message,
                },
                None => RequestError::Status(http_status),
            });
        }
        Ok(self.data)
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

/// Extract the human-readable `message` from an error body.
///
/// Returns `None` when the body is not JSON or has no non-empty `message`.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

/// Pagination block returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "one")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default = "one")]
    pub total_pages: usize,
}

fn one() -> usize {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit).max(1),
        }
    }
}

/// `?page=&limit=` query (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "one")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_reads_top_level_message() {
        assert_eq!(
            extract_message(r#"{"status":false,"message":"Invalid OTP"}"#),
            Some("Invalid OTP".to_string())
        );
        assert_eq!(extract_message(r#"{"status":false}"#), None);
        assert_eq!(extract_message(r#"{"message":"   "}"#), None);
        assert_eq!(extract_message(r#"{"message":{"nested":true}}"#), None);
        assert_eq!(extract_message("Bad Gateway"), None);
    }

    #[test]
    fn envelope_with_false_status_is_an_error() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"status":false,"message":"Store not found"}"#).unwrap();
        let err = resp.into_data(200).unwrap_err();
        assert_eq!(err.message_or("fallback"), "Store not found");
    }

    #[test]
    fn envelope_data_is_unwrapped() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(resp.into_data(200).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn envelope_without_data() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"status":true,"message":"OTP sent","data":null}"#).unwrap();
        assert_eq!(resp.clone().into_optional(200).unwrap(), None);
        assert!(matches!(resp.into_data(200), Err(RequestError::Decode(_))));
    }

    #[test]
    fn pagination_defaults_to_one_page() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.total_pages, 1);
        assert_eq!(Pagination::new(2, 10, 25).total_pages, 3);
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 1);
    }

    #[test]
    fn page_query_offset() {
        assert_eq!(PageQuery::new(1, 10).offset(), 0);
        assert_eq!(PageQuery::new(3, 10).offset(), 20);
        assert_eq!(PageQuery::new(0, 10).offset(), 0);
    }
}
