//! Ticket service layer.
//!
//! [`TicketService`] creates tickets, lists them and runs the assign/resolve/escalate actions
//! (see [`action`]). [`dashboard::DashboardService`] builds the tier-scoped employee views.

pub mod action;
pub mod dashboard;

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::ticket::{
        EmployeeRefDto, HistoryEntryDto, TicketDetailDto, TicketDto, TicketSummaryDto,
    },
    server::{
        data::{
            customer::CustomerRepository,
            employee::EmployeeRepository,
            ticket::{history::TicketHistoryRepository, state::TicketStateRepository, TicketRepository},
        },
        error::{domain::DomainError, Error},
        model::{
            account::Account,
            db::{EmployeeModel, TicketHistoryModel, TicketModel, TicketStateModel},
            ticket::HistoryEvent,
        },
        util::validation::{fit_description, required_text},
    },
};

pub const MAX_TITLE_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 250;
/// Longest comment accepted on resolutions and escalations
pub const MAX_COMMENT_LEN: usize = 200;

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket for a customer.
    ///
    /// The ticket, its creation entry and its state row are written in one transaction; the
    /// ticket starts waiting in the tier 1 queue.
    ///
    /// # Returns
    /// - `Ok(TicketDto)`: The created ticket
    /// - `Err(Error::DomainError(DomainError::Validation))`: Title or description is blank or too long
    /// - `Err(Error::DomainError(DomainError::NotFound))`: The customer does not exist
    pub async fn create_ticket(
        &self,
        customer_id: i32,
        title: &str,
        description: &str,
    ) -> Result<TicketDto, Error> {
        let title = required_text("Title", title, MAX_TITLE_LEN)?;
        let description = required_text("Description", description, MAX_DESCRIPTION_LEN)?;

        let txn = self.db.begin().await?;

        let customer = CustomerRepository::new(&txn)
            .get_by_id(customer_id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(customer_id))?;

        let today = Utc::now().date_naive();
        let ticket = TicketRepository::new(&txn)
            .create(customer.id, &title, &description, today)
            .await?;

        let event = HistoryEvent::Created;
        let entry = TicketHistoryRepository::new(&txn)
            .append(
                ticket.id,
                &event,
                &fit_description(
                    format!("Ticket creado por el cliente {}", customer.nickname),
                    MAX_DESCRIPTION_LEN,
                ),
                today,
            )
            .await?;
        let state = TicketStateRepository::new(&txn)
            .create(ticket.id, entry.id, event.projection(), today)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Customer {} opened ticket {} (entry {})",
            customer.id,
            ticket.id,
            entry.id
        );

        Ok(ticket_dto(ticket, Some(&state)))
    }

    /// A customer's tickets with their current status, newest first
    pub async fn get_customer_tickets(&self, customer_id: i32) -> Result<Vec<TicketDto>, Error> {
        let tickets = TicketRepository::new(self.db)
            .get_many_by_customer_id(customer_id)
            .await?;

        Ok(tickets
            .into_iter()
            .map(|(ticket, state)| ticket_dto(ticket, state.as_ref()))
            .collect())
    }

    /// Ticket with its full history, oldest entry first.
    ///
    /// Employees may view any ticket, customers only their own.
    ///
    /// # Returns
    /// - `Ok(TicketDetailDto)`: The ticket and its history
    /// - `Err(Error::DomainError(DomainError::NotFound))`: The ticket does not exist
    /// - `Err(Error::DomainError(DomainError::PermissionDenied))`: The account may not view the ticket
    /// - `Err(Error::InternalError)`: The state row disagrees with the history
    pub async fn get_ticket_detail(
        &self,
        account: &Account,
        ticket_id: i32,
    ) -> Result<TicketDetailDto, Error> {
        let ticket = TicketRepository::new(self.db)
            .get_by_id(ticket_id)
            .await?
            .ok_or_else(|| DomainError::ticket_not_found(ticket_id))?;

        match account {
            Account::Employee(_) => {}
            Account::Customer(customer) if customer.id == ticket.customer_id => {}
            _ => {
                return Err(DomainError::PermissionDenied(format!(
                    "You do not have access to ticket {}",
                    ticket_id
                ))
                .into())
            }
        }

        let history = TicketHistoryRepository::new(self.db)
            .get_many_by_ticket_id(ticket_id)
            .await?;
        let state = TicketStateRepository::new(self.db)
            .get_by_ticket_id(ticket_id)
            .await?;

        let head = history.last().map(|entry| entry.id);
        if head != state.as_ref().map(|state| state.head_entry_id) {
            return Err(Error::InternalError(format!(
                "State of ticket {} points at entry {:?} but its newest history entry is {:?}",
                ticket_id,
                state.as_ref().map(|state| state.head_entry_id),
                head
            )));
        }

        let employee_ids: Vec<i32> = history.iter().filter_map(|entry| entry.employee_id).collect();
        let employees = employees_by_id(self.db, &employee_ids).await?;

        Ok(TicketDetailDto {
            ticket: ticket_dto(ticket, state.as_ref()),
            history: history
                .into_iter()
                .map(|entry| history_entry_dto(entry, &employees))
                .collect(),
        })
    }
}

pub(crate) async fn employees_by_id<C: ConnectionTrait>(
    db: &C,
    ids: &[i32],
) -> Result<HashMap<i32, EmployeeModel>, DbErr> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    Ok(EmployeeRepository::new(db)
        .get_many_by_ids(&ids)
        .await?
        .into_iter()
        .map(|employee| (employee.id, employee))
        .collect())
}

fn employee_ref(
    employee_id: Option<i32>,
    employees: &HashMap<i32, EmployeeModel>,
) -> Option<EmployeeRefDto> {
    employee_id
        .and_then(|id| employees.get(&id))
        .map(|employee| EmployeeRefDto {
            id: employee.id,
            name: employee.name.clone(),
        })
}

pub(crate) fn ticket_dto(ticket: TicketModel, state: Option<&TicketStateModel>) -> TicketDto {
    let status = state.map(|state| state.status_id);

    TicketDto {
        id: ticket.id,
        title: ticket.title,
        description: ticket.description,
        created_on: ticket.created_on,
        customer_id: ticket.customer_id,
        status: status.map(Into::into),
        status_name: status.map(|status| status.label()).unwrap_or("Sin estado").to_string(),
    }
}

pub(crate) fn summary_dto(
    ticket: &TicketModel,
    state: &TicketStateModel,
    employees: &HashMap<i32, EmployeeModel>,
) -> TicketSummaryDto {
    TicketSummaryDto {
        ticket_id: ticket.id,
        title: ticket.title.clone(),
        customer_id: ticket.customer_id,
        created_on: ticket.created_on,
        status: state.status_id.into(),
        status_name: state.status_id.label().to_string(),
        employee: employee_ref(state.employee_id, employees),
        owner_tier: state.owner_tier,
        queue_tier: state.queue_tier,
        updated_on: state.updated_on,
        head_entry_id: state.head_entry_id,
    }
}

/// Summaries of state rows, loading the owning employees in one query
pub(crate) async fn summary_dtos<C: ConnectionTrait>(
    db: &C,
    rows: &[(TicketStateModel, TicketModel)],
) -> Result<Vec<TicketSummaryDto>, DbErr> {
    let employee_ids: Vec<i32> = rows.iter().filter_map(|(state, _)| state.employee_id).collect();
    let employees = employees_by_id(db, &employee_ids).await?;

    Ok(rows
        .iter()
        .map(|(state, ticket)| summary_dto(ticket, state, &employees))
        .collect())
}

fn history_entry_dto(
    entry: TicketHistoryModel,
    employees: &HashMap<i32, EmployeeModel>,
) -> HistoryEntryDto {
    HistoryEntryDto {
        id: entry.id,
        event: entry.event.into(),
        status: entry.status_id.into(),
        status_name: entry.status_id.label().to_string(),
        employee: employee_ref(entry.employee_id, employees),
        target_tier: entry.target_tier,
        description: entry.description,
        modified_on: entry.modified_on,
    }
}
