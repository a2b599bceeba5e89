use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_optional_json;
use crate::models::OkResponse;
use crate::routes::{self, Action, PathParams};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /api/v1/print/printers/status handler
///
/// Accepts the periodic status the firmware reports to its backend.
#[utoipa::path(
    post,
    path = routes::PRINTER_STATUS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Status recorded", body = OkResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse)
    ),
    tag = "print-api"
)]
pub async fn status_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    let body = parse_optional_json(&body)?;

    state
        .recorder
        .record(Action::StatusUpdate, PathParams::default(), body);

    tracing::debug!("Printer status update recorded");
    Ok((
        StatusCode::OK,
        Json(OkResponse {
            status: "ok".to_string(),
        }),
    ))
}
