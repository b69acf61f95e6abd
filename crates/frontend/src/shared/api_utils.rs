//! API utilities for form-backend communication
//!
//! The form endpoints are served by the same origin that served the page.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "http://localhost:8000"
/// - Empty string if window is not available (requests then stay relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/verify_abbreviation");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
