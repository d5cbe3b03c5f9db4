use serde::{Deserialize, Serialize};

use crate::model::ticket::TicketSummaryDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRoleDto {
    Agent,
    Supervisor,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRoleDto,
    pub tier: i32,
    pub active: bool,
}

/// Work counters shown on the employee detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeStatisticsDto {
    /// Distinct tickets ever assigned to the employee
    pub assigned: u64,
    /// Distinct tickets the employee resolved
    pub resolved: u64,
    /// Tickets currently in progress with the employee
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeDetailDto {
    pub employee: EmployeeDto,
    pub statistics: EmployeeStatisticsDto,
    pub recent_tickets: Vec<TicketSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateEmployeeDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRoleDto,
    /// Defaults to tier 1
    pub tier: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateEmployeeDto {
    pub role: Option<EmployeeRoleDto>,
    pub tier: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub nickname: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCustomerDto {
    pub nickname: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
