use axum::{
    extract::{OriginalUri, Request},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::views::percent_encode;

pub const ADMIN_TOKEN_COOKIE: &str = "admin_auth_token";
pub const LOGIN_PATH: &str = "/admin/login";

/// Gate for the admin area.
///
/// Only the presence of the session token is checked. Whether the token is
/// still valid is decided by the auth backend, not here. Without a token the
/// viewer is sent to the login page with the requested location attached.
pub async fn session_gate(request: Request, next: Next) -> Response {
    if has_session_token(request.headers()) {
        return next.run(request).await;
    }

    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| request.uri());
    let from = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/admin");

    tracing::info!(from, "No admin session token, redirecting to login");

    // 303 replaces the blocked request rather than stacking on it.
    Redirect::to(&login_location(from)).into_response()
}

/// True when the request carries a non-empty session token cookie.
pub fn has_session_token(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == ADMIN_TOKEN_COOKIE && !value.trim_matches('"').is_empty())
}

pub fn login_location(from: &str) -> String {
    format!("{}?from={}", LOGIN_PATH, percent_encode(from, b"/"))
}

/// Return location for after login. Only same-site paths are honoured.
pub fn safe_return_path(from: Option<&str>) -> &str {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/admin",
    }
}
