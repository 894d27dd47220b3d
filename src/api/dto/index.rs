//! DTOs for the API index endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiIndexResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub endpoints: ApiEndpoints,
}

#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    pub users: String,
    pub health: String,
}
