//! Backend location.
//!
//! `DASHBOARD_API_BASE` set at build time wins; otherwise the API is
//! expected on port 8000 of the host serving the dashboard.

const BACKEND_PORT: u16 = 8000;

/// Base URL every resource path is appended to, without a trailing slash
///
/// # Example
/// ```text
/// http://localhost:8000/api
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("DASHBOARD_API_BASE") {
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
    format!("{}//{}:{}/api", protocol, hostname, BACKEND_PORT)
}
