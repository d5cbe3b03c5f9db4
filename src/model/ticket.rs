use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatusDto {
    Waiting,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEventDto {
    Created,
    Assigned,
    Resolved,
    Escalated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeRefDto {
    pub id: i32,
    pub name: String,
}

/// A ticket with its current status, as listed for its customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_on: NaiveDate,
    pub customer_id: i32,
    pub status: Option<TicketStatusDto>,
    /// Display name of the status ("En espera", "En Proceso", "Resuelto")
    pub status_name: String,
}

/// A dashboard row, built from the ticket's current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketSummaryDto {
    pub ticket_id: i32,
    pub title: String,
    pub customer_id: i32,
    pub created_on: NaiveDate,
    pub status: TicketStatusDto,
    pub status_name: String,
    pub employee: Option<EmployeeRefDto>,
    pub owner_tier: Option<i32>,
    pub queue_tier: Option<i32>,
    pub updated_on: NaiveDate,
    /// ID of the newest history entry, send it back as `expected_entry_id`
    pub head_entry_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HistoryEntryDto {
    pub id: i32,
    pub event: HistoryEventDto,
    pub status: TicketStatusDto,
    pub status_name: String,
    pub employee: Option<EmployeeRefDto>,
    pub target_tier: Option<i32>,
    pub description: String,
    pub modified_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketDetailDto {
    pub ticket: TicketDto,
    /// Oldest entry first
    pub history: Vec<HistoryEntryDto>,
}

/// Tickets visible to an employee
///
/// Supervisors get the in-progress tickets of their tier in `assigned` and the tickets
/// waiting for their tier in `unassigned`. Agents get their own in-progress tickets in
/// `assigned` and never have unassigned tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    pub tier: i32,
    pub assigned: Vec<TicketSummaryDto>,
    pub unassigned: Vec<TicketSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTicketDto {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignTicketDto {
    pub agent_id: i32,
    /// Head entry the client last saw; the action is rejected if the ticket moved on
    pub expected_entry_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolveTicketDto {
    pub comment: Option<String>,
    pub expected_entry_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EscalateTicketDto {
    /// Reason for the escalation, required
    pub comment: String,
    pub expected_entry_id: Option<i32>,
}

/// Successful ticket action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActionDto {
    /// Always `true`
    pub success: bool,
    pub message: String,
    pub ticket_id: i32,
    /// ID of the history entry appended by the action
    pub entry_id: i32,
    pub status: TicketStatusDto,
}
