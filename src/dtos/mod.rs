use serde::Serialize;
use utoipa::ToSchema;

/// Message returned alongside every generated number.
pub const RANDOM_SUCCESS_MESSAGE: &str = "Random number generated successfully";

/// Response for the random number endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct RandomNumberResponse {
    /// The randomly generated number. Any finite value, positive or negative.
    #[schema(example = 42.0)]
    pub number: f64,

    #[schema(example = "Random number generated successfully")]
    pub message: String,
}

/// Static API description served at the root path.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    #[schema(example = "Random Number Generator API")]
    pub name: String,

    #[schema(example = "1.0.0")]
    pub version: String,

    #[schema(example = "/docs")]
    pub docs: String,

    #[schema(example = "/api-docs/openapi.json")]
    pub openapi: String,

    #[schema(example = "/random")]
    pub random_number_endpoint: String,
}

/// Liveness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,

    #[schema(example = "random-service")]
    pub service: String,

    #[schema(example = "1.0.0")]
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Internal server error")]
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
