use chibcha::server::controller::auth::{get_account, logout};

use super::*;

/// Tests the account endpoint without a logged in account.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn account_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ticket_tables().build().await?;

    let result = get_account(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests the account endpoint for a logged in customer.
///
/// Expected: 200 OK with the customer account
#[tokio::test]
async fn returns_customer_account() -> Result<(), TestError> {
    let test = support_desk().await?;
    log_in(&test, AccountType::Customer, 1).await;

    let result = get_account(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["id"], 1);

    Ok(())
}

/// Tests a session pointing at an account that no longer exists.
///
/// Expected: 404 Not Found and the session is cleared
#[tokio::test]
async fn clears_session_of_missing_account() -> Result<(), TestError> {
    let test = support_desk().await?;
    log_in(&test, AccountType::Customer, 42).await;

    let result = get_account(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionAccount::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Tests logout of a logged in account.
///
/// Expected: 204 No Content and an empty session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = support_desk().await?;
    log_in(&test, AccountType::Employee, TIER_1_AGENT).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionAccount::get(&test.session).await.unwrap().is_none());

    Ok(())
}
