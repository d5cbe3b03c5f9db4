use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::account::AccountType, server::error::Error};

pub const SESSION_ACCOUNT_KEY: &str = "chibcha:account";

/// Account type and ID of the logged in account.
///
/// Written once at login, every request resolves it back into an
/// [`Account`](crate::server::model::account::Account).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionAccount {
    pub account_type: AccountType,
    pub id: i32,
}

impl SessionAccount {
    /// Insert account into session
    pub async fn insert(
        session: &Session,
        account_type: AccountType,
        id: i32,
    ) -> Result<(), Error> {
        session
            .insert(SESSION_ACCOUNT_KEY, SessionAccount { account_type, id })
            .await?;

        Ok(())
    }

    /// Get account from session
    pub async fn get(session: &Session) -> Result<Option<SessionAccount>, Error> {
        Ok(session.get::<SessionAccount>(SESSION_ACCOUNT_KEY).await?)
    }
}
