use axum::{response::IntoResponse, Json};

use crate::dtos::HealthResponse;

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "random-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
