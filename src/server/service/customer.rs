use sea_orm::DatabaseConnection;

use crate::{
    model::employee::{CreateCustomerDto, CustomerDto},
    server::{
        data::customer::CustomerRepository,
        error::{domain::DomainError, Error},
        model::db::CustomerModel,
        util::validation::{optional_text, required_text},
    },
};

pub const MAX_NICKNAME_LEN: usize = 15;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 60;
pub const MAX_PHONE_LEN: usize = 15;

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer account.
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The new customer
    /// - `Err(Error::DomainError(DomainError::Validation))`: A field is blank or too long, or the
    ///   nickname is taken
    pub async fn create_customer(&self, customer: CreateCustomerDto) -> Result<CustomerDto, Error> {
        let nickname = required_text("Nickname", &customer.nickname, MAX_NICKNAME_LEN)?;
        let name = required_text("Name", &customer.name, MAX_NAME_LEN)?;
        let email = required_text("Email", &customer.email, MAX_EMAIL_LEN)?;
        let phone = optional_text("Phone", customer.phone.as_deref(), MAX_PHONE_LEN)?;

        let customer_repo = CustomerRepository::new(self.db);
        if customer_repo.find_by_nickname(&nickname).await?.is_some() {
            return Err(DomainError::Validation(format!(
                "Nickname {} is already taken",
                nickname
            ))
            .into());
        }

        let customer = customer_repo.create(&nickname, &name, &email, phone).await?;

        tracing::info!("Registered customer {} ({})", customer.id, customer.nickname);

        Ok(customer_dto(customer))
    }

    /// Deletes a customer together with their tickets and the tickets' history.
    ///
    /// # Returns
    /// - `Ok(())`: The customer is gone
    /// - `Err(Error::DomainError(DomainError::NotFound))`: No such customer
    pub async fn delete_customer(&self, customer_id: i32) -> Result<(), Error> {
        if !CustomerRepository::new(self.db).delete_by_id(customer_id).await? {
            return Err(DomainError::customer_not_found(customer_id).into());
        }

        tracing::info!("Deleted customer {}", customer_id);

        Ok(())
    }
}

fn customer_dto(customer: CustomerModel) -> CustomerDto {
    CustomerDto {
        id: customer.id,
        nickname: customer.nickname,
        name: customer.name,
        email: customer.email,
        phone: customer.phone,
    }
}
