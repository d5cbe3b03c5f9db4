use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{account::AccountDto, api::ErrorDto},
    server::{
        controller::util::get_account::get_account_from_session,
        error::Error,
        model::{app::AppState, session::account::SessionAccount},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Get the account logged in on this session
#[utoipa::path(
    get,
    path = "/api/auth/account",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Account of the current session", body = AccountDto),
        (status = 401, description = "No account in session", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Logs the account out by clearing its session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Only clear session if there is actually an account in session
    if SessionAccount::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}
