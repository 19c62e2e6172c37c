//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the referential API when it is served next to the frontend host
pub const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses the compile-time `API_BASE_URL` variable when it is set,
/// otherwise the current window location with the API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://ops.example.com"
/// - Empty string if neither is available (e.g. native test builds)
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/Supplier/Delete", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
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
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Joins a base and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
