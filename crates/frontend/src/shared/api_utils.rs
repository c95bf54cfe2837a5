//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use serde::Serialize;

/// Port of the vendor backend when no explicit base URL was configured
const BACKEND_PORT: u16 = 3001;

/// Get the base URL for API requests
///
/// `VENDOR_API_BASE` set at build time wins. Otherwise the URL is built from
/// the current window location with port 3001.
///
/// # Returns
/// - API base URL like "http://localhost:3001"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("VENDOR_API_BASE").filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/product/123");
/// ```
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

/// Absolute URL of a stored image; absolute URLs pass through
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
        path.to_string()
    } else {
        api_url(path)
    }
}

/// `path?query` from a serializable query struct
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if qs.is_empty() => path.to_string(),
        Ok(qs) => format!("{path}?{qs}"),
        Err(e) => {
            log::warn!("cannot encode query for {path}: {e}");
            path.to_string()
        }
    }
}
