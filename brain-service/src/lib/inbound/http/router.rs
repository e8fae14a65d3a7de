use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_content::create_content;
use super::handlers::create_share::create_share;
use super::handlers::delete_content::delete_content;
use super::handlers::list_content::list_content;
use super::handlers::resolve_share::resolve_share;
use super::handlers::signin::signin;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::content::ports::ContentServicePort;
use crate::domain::share::ports::ShareServicePort;
use crate::domain::user::ports::UserServicePort;

/// Unified application state for all HTTP handlers.
///
/// Services are held behind their ports so the same router runs against the
/// Postgres adapters in production and the in-memory adapters in tests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub content_service: Arc<dyn ContentServicePort>,
    pub share_service: Arc<dyn ShareServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    content_service: Arc<dyn ContentServicePort>,
    share_service: Arc<dyn ShareServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        content_service,
        share_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/signin", post(signin))
        .route("/api/v1/brain/:share_link", get(resolve_share));

    let protected_routes = Router::new()
        .route(
            "/api/v1/content",
            post(create_content).get(list_content).delete(delete_content),
        )
        .route("/api/v1/brain/share", post(create_share))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
