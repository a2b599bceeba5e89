use crate::models::IdentifyResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /__identify__ handler - test-harness introspection
///
/// Lets a test suite confirm that the process answering on this port is the
/// dummy backend (and which build of it) before driving the firmware
/// against it.
#[utoipa::path(
    get,
    path = routes::IDENTIFY,
    responses(
        (status = 200, description = "Server identity", body = IdentifyResponse)
    ),
    tag = "harness"
)]
pub async fn identify() -> (StatusCode, Json<IdentifyResponse>) {
    (
        StatusCode::OK,
        Json(IdentifyResponse {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
