use crate::api_doc::ApiDoc;
use crate::error::ApiError;
use crate::handlers;
use crate::routes::{self, Action, PathParams, RouteMatch};
use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    handler::Handler,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::convert::Infallible;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the dummy backend router.
///
/// All printer and harness routes go through the route table in `routes`
/// rather than axum's own path registry: a request that matches on path but
/// not on method must be a 404, where axum's registry would answer 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch(State(state): State<AppState>, mut req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match routes::resolve(&method, &path) {
        RouteMatch::Action { action, params } => {
            tracing::debug!("{} {} dispatched to {:?}", method, path, action);
            req.extensions_mut().insert(params);
            match action {
                Action::CreatePrinter => handlers::create_printer.call(req, state).await,
                Action::CommandAcknowledgement => {
                    handlers::command_acknowledgement.call(req, state).await
                }
                Action::StatusUpdate => handlers::status_update.call(req, state).await,
                Action::Identify => handlers::identify.call(req, state).await,
                Action::RegisterPrinter => handlers::register_printer.call(req, state).await,
                Action::Command => handlers::command.call(req, state).await,
            }
        }
        RouteMatch::Redirect { location } => redirect(location),
        RouteMatch::NotFound => {
            tracing::debug!("{} {} has no route", method, path);
            ApiError::RouteNotFound { method, path }.into_response()
        }
    }
}

/// Static 302 with a Location header; no handler is involved.
fn redirect(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

impl<S> FromRequestParts<S> for PathParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The dispatcher stashes captures in request extensions before
        // invoking the handler; routes without captures see an empty map.
        Ok(parts
            .extensions
            .get::<PathParams>()
            .cloned()
            .unwrap_or_default())
    }
}
