use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::MessageResponseData;

/// Extension type carrying the authenticated user ID through the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware gating protected routes behind a valid bearer token.
///
/// The `authorization` header's entire value is the token; no scheme prefix
/// is stripped, so a `Bearer `-prefixed header fails verification. Every
/// failure path produces the same 403 body and the downstream handler is
/// never invoked.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        not_logged_in()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user ID");
        not_logged_in()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(not_logged_in)?;

    header.to_str().map_err(|_| not_logged_in())
}

fn not_logged_in() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(MessageResponseData::new("You are not logged in")),
    )
        .into_response()
}
