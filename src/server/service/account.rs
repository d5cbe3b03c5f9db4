use sea_orm::DatabaseConnection;

use crate::{
    model::account::{AccountQueryDto, AccountSummaryDto, AccountType},
    server::{
        data::{
            administrator::AdministratorRepository, customer::CustomerRepository,
            employee::EmployeeRepository,
        },
        error::{auth::AuthError, Error},
        model::{account::Account, session::account::SessionAccount},
    },
};

/// Resolves session accounts into database accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the account a session points at.
    ///
    /// Administrator logins stamp `last_access`.
    ///
    /// # Returns
    /// - `Ok(Account)`: The account exists and is active
    /// - `Err(Error::AuthError(AuthError::AccountNotInDatabase))`: The account no longer exists
    /// - `Err(Error::AuthError(AuthError::AccountInactive))`: The employee or administrator is deactivated
    pub async fn get_account(&self, session_account: SessionAccount) -> Result<Account, Error> {
        let SessionAccount { account_type, id } = session_account;
        let not_found = || Error::AuthError(AuthError::AccountNotInDatabase { account_type, id });
        let inactive = || Error::AuthError(AuthError::AccountInactive { account_type, id });

        match account_type {
            AccountType::Customer => {
                let customer = CustomerRepository::new(self.db)
                    .get_by_id(id)
                    .await?
                    .ok_or_else(not_found)?;

                Ok(Account::Customer(customer))
            }
            AccountType::Employee => {
                let employee = EmployeeRepository::new(self.db)
                    .get_by_id(id)
                    .await?
                    .ok_or_else(not_found)?;
                if !employee.active {
                    return Err(inactive());
                }

                Ok(Account::Employee(employee))
            }
            AccountType::Administrator => {
                let administrator_repo = AdministratorRepository::new(self.db);
                let administrator = administrator_repo
                    .get_by_id(id)
                    .await?
                    .ok_or_else(not_found)?;
                if !administrator.active {
                    return Err(inactive());
                }

                administrator_repo.touch_last_access(id).await?;

                Ok(Account::Administrator(administrator))
            }
        }
    }

    /// Lists customers, then employees, then administrators, each ordered by ID.
    ///
    /// A blank `q` lists every account of the selected types.
    pub async fn list_accounts(
        &self,
        query: &AccountQueryDto,
    ) -> Result<Vec<AccountSummaryDto>, Error> {
        let search = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty());
        let listed = |account_type: AccountType| query.account_type.is_none_or(|kind| kind == account_type);

        let mut accounts = Vec::new();
        if listed(AccountType::Customer) {
            let customers = CustomerRepository::new(self.db).get_many(search).await?;
            accounts.extend(customers.into_iter().map(|customer| AccountSummaryDto {
                account_type: AccountType::Customer,
                id: customer.id,
                name: customer.name,
                email: customer.email,
                active: true,
            }));
        }
        if listed(AccountType::Employee) {
            let employees = EmployeeRepository::new(self.db).get_many(search).await?;
            accounts.extend(employees.into_iter().map(|employee| AccountSummaryDto {
                account_type: AccountType::Employee,
                id: employee.id,
                name: employee.name,
                email: employee.email,
                active: employee.active,
            }));
        }
        if listed(AccountType::Administrator) {
            let administrators = AdministratorRepository::new(self.db).get_many(search).await?;
            accounts.extend(administrators.into_iter().map(|administrator| {
                AccountSummaryDto {
                    account_type: AccountType::Administrator,
                    id: administrator.id,
                    name: administrator.name,
                    email: administrator.email,
                    active: administrator.active,
                }
            }));
        }

        Ok(accounts)
    }
}
