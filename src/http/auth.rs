//! Bearer-token gate applied to every API route
//!
//! Accepts or rejects before any handler runs; the rule is a static secret
//! comparison against the configured token.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::server::AppState;

pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    if token != state.auth_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
