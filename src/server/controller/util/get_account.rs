use tower_sessions::Session;

use crate::{
    model::account::AccountType,
    server::{
        error::{auth::AuthError, Error},
        model::{
            account::Account,
            app::AppState,
            db::{AdministratorModel, CustomerModel, EmployeeModel},
            session::account::SessionAccount,
        },
        service::account::AccountService,
    },
};

/// Retrieves the account from session and then from database
///
/// # Returns
/// - `Ok(Account)`: Account found and active
/// - `Err(Error::AuthError(AuthError::AccountNotInSession))`: No account in session
/// - `Err(Error::AuthError(AuthError::AccountNotInDatabase))`: Account in session but not in
///   database, the session is cleared
/// - `Err(Error::AuthError(AuthError::AccountInactive))`: Account is deactivated
pub async fn get_account_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Account, Error> {
    let Some(session_account) = SessionAccount::get(session).await? else {
        return Err(Error::AuthError(AuthError::AccountNotInSession));
    };

    match AccountService::new(&state.db)
        .get_account(session_account)
        .await
    {
        Err(Error::AuthError(AuthError::AccountNotInDatabase { account_type, id })) => {
            session.clear().await;

            tracing::debug!(
                "Session cleared for {:?} account ID {} with active session but was not found in database",
                account_type,
                id
            );

            Err(Error::AuthError(AuthError::AccountNotInDatabase { account_type, id }))
        }
        result => result,
    }
}

pub async fn get_customer_from_session(
    state: &AppState,
    session: &Session,
) -> Result<CustomerModel, Error> {
    match get_account_from_session(state, session).await? {
        Account::Customer(customer) => Ok(customer),
        account => Err(wrong_account_type(AccountType::Customer, &account)),
    }
}

pub async fn get_employee_from_session(
    state: &AppState,
    session: &Session,
) -> Result<EmployeeModel, Error> {
    match get_account_from_session(state, session).await? {
        Account::Employee(employee) => Ok(employee),
        account => Err(wrong_account_type(AccountType::Employee, &account)),
    }
}

pub async fn get_administrator_from_session(
    state: &AppState,
    session: &Session,
) -> Result<AdministratorModel, Error> {
    match get_account_from_session(state, session).await? {
        Account::Administrator(administrator) => Ok(administrator),
        account => Err(wrong_account_type(AccountType::Administrator, &account)),
    }
}

fn wrong_account_type(expected: AccountType, account: &Account) -> Error {
    Error::AuthError(AuthError::WrongAccountType {
        expected,
        actual: account.account_type(),
    })
}
