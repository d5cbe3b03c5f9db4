use serde::{Deserialize, Serialize};

/// The kind of account a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Customer,
    Employee,
    Administrator,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountDto {
    pub account_type: AccountType,
    pub id: i32,
    pub name: String,
}

/// One row of the administrator account list
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountSummaryDto {
    pub account_type: AccountType,
    pub id: i32,
    pub name: String,
    pub email: String,
    pub active: bool,
}

/// Filters for the administrator account list
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountQueryDto {
    /// Only list accounts of this type
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    /// Text contained in the name, email or customer nickname
    pub q: Option<String>,
}
