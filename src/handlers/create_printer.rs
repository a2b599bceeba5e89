use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_optional_json;
use crate::models::RegistrationCodeResponse;
use crate::routes::{self, Action, PathParams};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /api/v1/print/printers/registration_code handler
///
/// Issues a fresh registration code the way the real backend would when a
/// printer asks to be paired with a user account. The request is recorded
/// so the test suite can assert the firmware asked for a code.
#[utoipa::path(
    post,
    path = routes::REGISTRATION_CODE,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Registration code issued", body = RegistrationCodeResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse)
    ),
    tag = "print-api"
)]
pub async fn create_printer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegistrationCodeResponse>), ApiError> {
    let body = parse_optional_json(&body)?;

    let uuid = Uuid::new_v4().simple().to_string();
    let registration_code = uuid[..8].to_uppercase();

    state
        .recorder
        .record(Action::CreatePrinter, PathParams::default(), body);

    tracing::info!("Issued registration code {}", registration_code);
    Ok((
        StatusCode::OK,
        Json(RegistrationCodeResponse { registration_code }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use crate::models::RegistrationCodeResponse;
    use crate::recorder::Recorder;
    use crate::routes::Action;
    use crate::state::AppState;
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> (Router, Recorder) {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let state = AppState {
            recorder: Recorder::new(),
            config: Arc::new(config),
        };
        let recorder = state.recorder.clone();
        (crate::app::router(state), recorder)
    }

    #[tokio::test]
    async fn test_create_printer_with_empty_body() {
        let (app, recorder) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/print/printers/registration_code")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: RegistrationCodeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.registration_code.len(), 8);
        assert!(response_json
            .registration_code
            .chars()
            .all(|c| c.is_ascii_hexdigit()));

        let received = recorder.received_for(Action::CreatePrinter);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body, None);
    }

    #[tokio::test]
    async fn test_create_printer_records_json_body() {
        let (app, recorder) = test_app();

        let request_body = serde_json::json!({"serial_number": "10034"});
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/print/printers/registration_code")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&request_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let received = recorder.received_for(Action::CreatePrinter);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body, Some(request_body));
    }

    #[tokio::test]
    async fn test_create_printer_invalid_json() {
        let (app, recorder) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/print/printers/registration_code")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("JSON parse error"));
        assert!(recorder.is_empty());
    }

    #[tokio::test]
    async fn test_registration_codes_are_fresh() {
        let (app, _recorder) = test_app();

        let mut codes = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/print/printers/registration_code")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let response_json: RegistrationCodeResponse = serde_json::from_slice(&body).unwrap();
            codes.push(response_json.registration_code);
        }

        assert_ne!(codes[0], codes[1]);
    }
}
