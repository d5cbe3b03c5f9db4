use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ActionErrorDto;

/// Expected rejection of a ticket action or account operation.
///
/// Returned before anything is written, or after the transaction was rolled back.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Referenced ticket, employee or customer does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// Caller's role or tier does not allow the operation, or the caller does not own the ticket.
    #[error("{0}")]
    PermissionDenied(String),
    /// The ticket is not in a state where the operation applies.
    #[error("{0}")]
    InvalidState(String),
    /// Malformed input.
    #[error("{0}")]
    Validation(String),
    /// Another action changed the ticket after the caller read it.
    #[error("Ticket {ticket_id} was changed by another action, reload it and try again")]
    Conflict { ticket_id: i32 },
}

impl DomainError {
    pub fn ticket_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Ticket",
            id,
        }
    }

    pub fn employee_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Employee",
            id,
        }
    }

    pub fn customer_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Customer",
            id,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PermissionDenied(_) => StatusCode::FORBIDDEN,
            Self::InvalidState(_) | Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            self.status_code(),
            Json(ActionErrorDto {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
