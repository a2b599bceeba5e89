use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_optional_json;
use crate::models::AckResponse;
use crate::routes::{Action, PathParams};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /api/v1/print/printers/command/:task_id handler
///
/// The firmware posts here to acknowledge a command it was given. The
/// captured task id and the acknowledgement body are recorded for the
/// test suite to inspect.
#[utoipa::path(
    post,
    path = "/api/v1/print/printers/command/{task_id}",
    params(
        ("task_id" = String, Path, description = "Task the firmware is acknowledging")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Acknowledgement recorded", body = AckResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse)
    ),
    tag = "print-api"
)]
pub async fn command_acknowledgement(
    State(state): State<AppState>,
    params: PathParams,
    body: Bytes,
) -> Result<(StatusCode, Json<AckResponse>), ApiError> {
    let task_id = params
        .get("task_id")
        .ok_or(ApiError::MissingPathParam("task_id"))?
        .to_string();
    let body = parse_optional_json(&body)?;

    state
        .recorder
        .record(Action::CommandAcknowledgement, params, body);

    tracing::info!("Acknowledgement received for task {}", task_id);
    Ok((StatusCode::OK, Json(AckResponse { task_id })))
}
