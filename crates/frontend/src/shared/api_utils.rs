//! URL helpers for talking to the auth backend.

/// Port the auth backend listens on, next to the static file host.
const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, derived from the current window location.
///
/// Returns an empty string outside a browser, which turns every request into
/// a relative one.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_origin(&protocol, &hostname)
}

fn backend_origin(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL for an API path such as `/api/system/auth/me`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
