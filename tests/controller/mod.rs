//! Tests for the HTTP handlers, called directly with the test session.

mod auth;
mod ticket;

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chibcha::{model::account::AccountType, server::model::session::account::SessionAccount};
use chibcha_test_utils::prelude::*;

use crate::util::*;

/// Stores an account in the test session as a login would
async fn log_in(test: &TestContext, account_type: AccountType, id: i32) {
    SessionAccount::insert(&test.session, account_type, id)
        .await
        .unwrap();
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
