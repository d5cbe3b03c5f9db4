use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{account::AccountType, api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No account is present in session")]
    AccountNotInSession,
    #[error("{account_type:?} account ID {id} not found in database despite having an active session")]
    AccountNotInDatabase { account_type: AccountType, id: i32 },
    #[error("{account_type:?} account ID {id} is deactivated")]
    AccountInactive { account_type: AccountType, id: i32 },
    #[error("Route requires a {expected:?} account but session holds a {actual:?} account")]
    WrongAccountType {
        expected: AccountType,
        actual: AccountType,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::AccountNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::AccountNotInDatabase { .. } => (StatusCode::NOT_FOUND, "Account not found"),
            Self::AccountInactive { .. } => (StatusCode::FORBIDDEN, "Your account is deactivated"),
            Self::WrongAccountType { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this page",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
