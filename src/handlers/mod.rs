pub mod command;
pub mod command_ack;
pub mod create_printer;
pub mod identify;
pub mod register_printer;
pub mod status_update;

pub use command::command;
pub use command_ack::command_acknowledgement;
pub use create_printer::create_printer;
pub use identify::identify;
pub use register_printer::register_printer;
pub use status_update::status_update;

use crate::error::ApiError;
use serde_json::Value as JsonValue;

/// Parse an optional JSON request body.
///
/// Empty bodies are accepted (the firmware probes some endpoints bare);
/// a non-empty body that is not valid JSON is a 400.
pub(crate) fn parse_optional_json(body: &[u8]) -> Result<Option<JsonValue>, ApiError> {
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}
