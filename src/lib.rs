pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::api_info,
        handlers::random::get_random_number,
        handlers::health::health_check,
    ),
    components(
        schemas(
            dtos::RandomNumberResponse,
            dtos::ApiInfoResponse,
            dtos::HealthResponse,
            dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "Random", description = "Random number generation"),
        (name = "Root", description = "API metadata"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Build the HTTP router with all routes, docs, and middleware layers.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::api_info))
        .route("/random", get(handlers::get_random_number))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
}
