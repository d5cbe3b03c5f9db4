use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a ticket action or account operation is rejected
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActionErrorDto {
    /// Always `false`
    pub success: bool,
    /// The reason the request was rejected
    pub error: String,
}
