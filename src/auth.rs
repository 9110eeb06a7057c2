//! HTTP Basic authentication middleware
//!
//! Every API route sits behind a single shared credential pair injected from
//! `Config`; nothing here reads ambient configuration. Requests that fail the
//! check are rejected with a 401 challenge before reaching the service layer.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::AppError;
use crate::AppState;

/// Extract the username/password pair from a Basic Authorization header
fn extract_basic_credentials(request: &Request<Body>) -> Option<(String, String)> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Authentication middleware
///
/// Compares the supplied credential pair against the configured one and
/// rejects the request before any handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (username, password) =
        extract_basic_credentials(&request).ok_or(AppError::Unauthorized)?;

    if username != state.config.api_username || password != state.config.api_password {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
