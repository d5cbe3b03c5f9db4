use std::collections::HashMap;

use entity::sea_orm_active_enums::{EmployeeRole, Status};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::ticket::{DashboardDto, TicketSummaryDto},
    server::{
        data::ticket::{history::TicketHistoryRepository, state::TicketStateRepository, TicketRepository},
        error::{domain::DomainError, Error},
        model::{
            db::{EmployeeModel, TicketHistoryModel, TicketStateModel},
            ticket::HistoryEvent,
        },
        service::{
            retry::RetryContext,
            ticket::{employees_by_id, summary_dto, summary_dtos},
        },
    },
};

/// Builds the tier-scoped ticket views of employees.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tickets visible to an employee, read from the ticket state projection.
    ///
    /// - Supervisors: `assigned` holds the tickets in progress with an agent of their tier,
    ///   `unassigned` the tickets waiting in their tier's queue.
    /// - Agents: `assigned` holds their own tickets in progress, `unassigned` is empty.
    ///
    /// Read only; transient database errors are retried.
    ///
    /// # Returns
    /// - `Ok(DashboardDto)`: The employee's dashboard
    /// - `Err(Error::DomainError(DomainError::PermissionDenied))`: The employee is deactivated
    pub async fn get_dashboard_tickets(
        &self,
        employee: &EmployeeModel,
    ) -> Result<DashboardDto, Error> {
        require_active(employee)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let employee_id = employee.id;
        let role = employee.role;
        let tier = employee.tier;

        ctx.execute_with_retry(&format!("dashboard of employee {}", employee_id), || {
            let db = db.clone();

            Box::pin(async move {
                let state_repo = TicketStateRepository::new(&db);

                let (assigned, unassigned) = match role {
                    EmployeeRole::Supervisor => (
                        state_repo.get_in_progress_at_tier(tier).await?,
                        state_repo.get_waiting_in_tier(tier).await?,
                    ),
                    EmployeeRole::Agent => (
                        state_repo.get_in_progress_by_employee_id(employee_id).await?,
                        Vec::new(),
                    ),
                };

                Ok(DashboardDto {
                    tier,
                    assigned: summary_dtos(&db, &assigned).await?,
                    unassigned: summary_dtos(&db, &unassigned).await?,
                })
            })
        })
        .await
    }

    /// The same dashboard as [`Self::get_dashboard_tickets`], derived from the history log
    /// alone without reading the state projection.
    ///
    /// Used to audit the projection: both must always return equal dashboards.
    pub async fn rebuild_dashboard_tickets(
        &self,
        employee: &EmployeeModel,
    ) -> Result<DashboardDto, Error> {
        require_active(employee)?;

        let history_repo = TicketHistoryRepository::new(self.db);

        let (mut assigned, unassigned) = match employee.role {
            EmployeeRole::Supervisor => {
                let assignments: Vec<TicketHistoryModel> = history_repo
                    .get_latest_assignments_by_tier(employee.tier)
                    .await?
                    .into_iter()
                    .filter(|(entry, _)| entry.status_id == Status::InProgress)
                    .map(|(entry, _)| entry)
                    .collect();

                (
                    self.keep_heads(assignments).await?,
                    history_repo.get_waiting_in_tier(employee.tier).await?,
                )
            }
            EmployeeRole::Agent => {
                let owned: Vec<TicketHistoryModel> = history_repo
                    .get_many_by_employee_id(employee.id)
                    .await?
                    .into_iter()
                    .filter(|entry| entry.status_id == Status::InProgress)
                    .collect();

                (self.keep_heads(owned).await?, Vec::new())
            }
        };

        assigned.sort_by_key(|entry| std::cmp::Reverse((entry.modified_on, entry.id)));

        Ok(DashboardDto {
            tier: employee.tier,
            assigned: self.derived_summaries(assigned).await?,
            unassigned: self.derived_summaries(unassigned).await?,
        })
    }

    /// Drops entries that are no longer their ticket's newest entry
    async fn keep_heads(
        &self,
        entries: Vec<TicketHistoryModel>,
    ) -> Result<Vec<TicketHistoryModel>, Error> {
        let ticket_ids: Vec<i32> = entries.iter().map(|entry| entry.ticket_id).collect();
        let heads = TicketHistoryRepository::new(self.db)
            .get_latest_by_ticket_ids(&ticket_ids)
            .await?;

        let mut seen = std::collections::HashSet::new();

        Ok(entries
            .into_iter()
            .filter(|entry| heads.get(&entry.ticket_id).is_some_and(|head| head.id == entry.id))
            .filter(|entry| seen.insert(entry.ticket_id))
            .collect())
    }

    async fn derived_summaries(
        &self,
        entries: Vec<TicketHistoryModel>,
    ) -> Result<Vec<TicketSummaryDto>, Error> {
        derive_summaries(self.db, entries).await
    }
}

/// State row implied by a ticket's newest history entry
///
/// # Arguments
/// - `entry`: The ticket's authoritative history entry
/// - `employee_tier`: Tier of the entry's employee, when it has one
pub fn derive_state(
    entry: &TicketHistoryModel,
    employee_tier: Option<i32>,
) -> Result<TicketStateModel, Error> {
    let projection = HistoryEvent::from_entry(entry, employee_tier)?.projection();

    Ok(TicketStateModel {
        ticket_id: entry.ticket_id,
        head_entry_id: entry.id,
        status_id: projection.status,
        employee_id: projection.employee_id,
        owner_tier: projection.owner_tier,
        queue_tier: projection.queue_tier,
        updated_on: entry.modified_on,
    })
}

async fn derive_summaries<C: ConnectionTrait>(
    db: &C,
    entries: Vec<TicketHistoryModel>,
) -> Result<Vec<TicketSummaryDto>, Error> {
    let ticket_ids: Vec<i32> = entries.iter().map(|entry| entry.ticket_id).collect();
    let tickets: HashMap<i32, _> = TicketRepository::new(db)
        .get_many_by_ids(&ticket_ids)
        .await?
        .into_iter()
        .map(|ticket| (ticket.id, ticket))
        .collect();

    let employee_ids: Vec<i32> = entries.iter().filter_map(|entry| entry.employee_id).collect();
    let employees = employees_by_id(db, &employee_ids).await?;

    let mut summaries = Vec::with_capacity(entries.len());
    for entry in entries {
        let ticket = tickets.get(&entry.ticket_id).ok_or_else(|| {
            Error::InternalError(format!(
                "History entry {} references missing ticket {}",
                entry.id, entry.ticket_id
            ))
        })?;
        let employee_tier = entry
            .employee_id
            .and_then(|id| employees.get(&id))
            .map(|employee| employee.tier);
        let state = derive_state(&entry, employee_tier)?;

        summaries.push(summary_dto(ticket, &state, &employees));
    }

    Ok(summaries)
}

fn require_active(employee: &EmployeeModel) -> Result<(), DomainError> {
    if !employee.active {
        return Err(DomainError::PermissionDenied(format!(
            "Employee {} is deactivated",
            employee.id
        )));
    }

    Ok(())
}
