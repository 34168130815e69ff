use axum::{response::IntoResponse, Json};

use crate::dtos::ApiInfoResponse;

/// API information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API name, version, and available endpoints", body = ApiInfoResponse)
    ),
    tag = "Root"
)]
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfoResponse {
        name: "Random Number Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/docs".to_string(),
        openapi: "/api-docs/openapi.json".to_string(),
        random_number_endpoint: "/random".to_string(),
    })
}
