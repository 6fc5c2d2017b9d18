pub mod api;
pub mod telemetry;

use std::sync::Arc;

use axum::extract::MatchedPath;
use axum::http::{header, Method, Request};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use cookbook_core::Store;

/// Application state shared across all handlers
pub type AppState = Arc<Store>;

/// Builds the full application router over the given store.
///
/// Every response, errors included, carries the permissive CORS headers; the
/// CORS layer also answers preflight OPTIONS before the router sees them.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/api/ping",
            get(api::testing::ping::ping)
                .options(api::preflight)
                .fallback(api::method_not_allowed),
        )
        .route("/api-docs/openapi.json", get(api::openapi_json))
        .nest(
            "/api/recipes",
            api::recipes::router().merge(api::comments::router()),
        )
        .fallback(api::not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        )
}
