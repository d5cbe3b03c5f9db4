use crate::{
    model::account::{AccountDto, AccountType},
    server::model::db::{AdministratorModel, CustomerModel, EmployeeModel},
};

/// Account behind the current session, loaded from its table.
#[derive(Debug, Clone)]
pub enum Account {
    Customer(CustomerModel),
    Employee(EmployeeModel),
    Administrator(AdministratorModel),
}

impl Account {
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Customer(_) => AccountType::Customer,
            Self::Employee(_) => AccountType::Employee,
            Self::Administrator(_) => AccountType::Administrator,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Customer(customer) => customer.id,
            Self::Employee(employee) => employee.id,
            Self::Administrator(administrator) => administrator.id,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        let account_type = self.account_type();
        let (id, name) = match self {
            Self::Customer(customer) => (customer.id, customer.name),
            Self::Employee(employee) => (employee.id, employee.name),
            Self::Administrator(administrator) => (administrator.id, administrator.name),
        };

        AccountDto {
            account_type,
            id,
            name,
        }
    }
}
