use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_optional_json;
use crate::models::CommandResponse;
use crate::routes::{self, Action, PathParams};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /command handler - test-harness helper
///
/// The test suite hands the simulated backend a command destined for the
/// printer under test. The command is recorded under a fresh task id,
/// which the firmware later acknowledges via the command acknowledgement
/// endpoint.
#[utoipa::path(
    post,
    path = routes::COMMAND,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Command recorded", body = CommandResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse)
    ),
    tag = "harness"
)]
pub async fn command(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CommandResponse>), ApiError> {
    let body = parse_optional_json(&body)?;

    let task_id = Uuid::new_v4().to_string();

    state
        .recorder
        .record(Action::Command, PathParams::default(), body);

    tracing::info!("Command recorded as task {}", task_id);
    Ok((StatusCode::OK, Json(CommandResponse { task_id })))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::models::CommandResponse;
    use crate::recorder::Recorder;
    use crate::routes::Action;
    use crate::state::AppState;
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

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
    async fn test_command_returns_fresh_task_id() {
        let (app, recorder) = test_app();

        let request_body = serde_json::json!({"command": "pause"});
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/command")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&request_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: CommandResponse = serde_json::from_slice(&body).unwrap();
        assert!(Uuid::parse_str(&response_json.task_id).is_ok());

        let received = recorder.received_for(Action::Command);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body, Some(request_body));
    }

    #[tokio::test]
    async fn test_command_is_post_only() {
        let (app, _recorder) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/command")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
