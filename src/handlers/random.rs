use axum::{response::IntoResponse, Json};

use crate::dtos::{RandomNumberResponse, RANDOM_SUCCESS_MESSAGE};
use crate::services::{generate_random_number, record_random_generated};

/// Generate a random number
#[utoipa::path(
    get,
    path = "/random",
    responses(
        (status = 200, description = "A random number with a success message", body = RandomNumberResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Random"
)]
pub async fn get_random_number() -> impl IntoResponse {
    metrics::counter!("random_requests_total").increment(1);

    let number = generate_random_number();
    record_random_generated();

    Json(RandomNumberResponse {
        number,
        message: RANDOM_SUCCESS_MESSAGE.to_string(),
    })
}
