use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_optional_json;
use crate::models::RegisterPrinterResponse;
use crate::routes::{self, Action, PathParams};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /v1/user/printers handler - test-harness helper
///
/// The test suite registers a printer with the simulated backend through
/// this endpoint; the assigned id can then be used when driving commands.
#[utoipa::path(
    post,
    path = routes::REGISTER_PRINTER,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Printer registered", body = RegisterPrinterResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse)
    ),
    tag = "harness"
)]
pub async fn register_printer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegisterPrinterResponse>), ApiError> {
    let body = parse_optional_json(&body)?;

    let printer_id = Uuid::new_v4().to_string();

    state
        .recorder
        .record(Action::RegisterPrinter, PathParams::default(), body);

    tracing::info!("Registered printer {}", printer_id);
    Ok((StatusCode::OK, Json(RegisterPrinterResponse { printer_id })))
}
