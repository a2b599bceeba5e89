use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    AckResponse, CommandResponse, IdentifyResponse, OkResponse, RegisterPrinterResponse,
    RegistrationCodeResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dummy-print-server API",
        version = "1.0.0",
        description = "A dummy print-service backend used by firmware integration tests"
    ),
    paths(
        handlers::create_printer::create_printer,
        handlers::command_ack::command_acknowledgement,
        handlers::status_update::status_update,
        handlers::identify::identify,
        handlers::register_printer::register_printer,
        handlers::command::command
    ),
    components(
        schemas(
            RegistrationCodeResponse,
            AckResponse,
            OkResponse,
            IdentifyResponse,
            RegisterPrinterResponse,
            CommandResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "print-api", description = "Endpoints the printer firmware talks to"),
        (name = "harness", description = "Helper endpoints for the test suite")
    )
)]
pub struct ApiDoc;
