use serde::{Deserialize, Serialize};

/// Response type for successful registration code requests
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegistrationCodeResponse {
    pub registration_code: String,
}

/// Response type for command acknowledgements, echoing the captured task
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AckResponse {
    pub task_id: String,
}

/// Generic success response for endpoints with no payload of their own
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OkResponse {
    pub status: String,
}

/// Response type for the identify endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct IdentifyResponse {
    pub name: String,
    pub version: String,
}

/// Response type for the printer registration helper endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterPrinterResponse {
    pub printer_id: String,
}

/// Response type for the command helper endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommandResponse {
    pub task_id: String,
}
