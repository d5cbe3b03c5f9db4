use std::collections::HashSet;

use entity::sea_orm_active_enums::{EmployeeRole, HistoryEventKind};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        employee::{
            CreateEmployeeDto, EmployeeDetailDto, EmployeeDto, EmployeeStatisticsDto,
            UpdateEmployeeDto,
        },
        ticket::TicketSummaryDto,
    },
    server::{
        data::{
            employee::{EmployeeChanges, EmployeeRepository, NewEmployee},
            ticket::{history::TicketHistoryRepository, state::TicketStateRepository, TicketRepository},
        },
        error::{domain::DomainError, Error},
        model::{db::EmployeeModel, ticket::MAX_TIER},
        service::{
            customer::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PHONE_LEN},
            ticket::summary_dtos,
        },
        util::validation::{optional_text, required_text},
    },
};

/// Number of tickets listed on the employee detail view
const RECENT_TICKETS: usize = 5;

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active agents a supervisor can assign tickets to
    pub async fn get_agents_for_supervisor(
        &self,
        supervisor: &EmployeeModel,
    ) -> Result<Vec<EmployeeDto>, Error> {
        if supervisor.role != EmployeeRole::Supervisor {
            return Err(DomainError::PermissionDenied(
                "Only supervisors can list agents".to_string(),
            )
            .into());
        }

        let agents = EmployeeRepository::new(self.db)
            .get_active_agents_by_tier(supervisor.tier)
            .await?;

        Ok(agents.into_iter().map(employee_dto).collect())
    }

    /// Employee profile with work statistics and the tickets worked on most recently.
    ///
    /// Visible to the employee and to supervisors of the employee's tier.
    ///
    /// # Returns
    /// - `Ok(EmployeeDetailDto)`: The employee's detail view
    /// - `Err(Error::DomainError(DomainError::NotFound))`: No such employee
    /// - `Err(Error::DomainError(DomainError::PermissionDenied))`: The viewer may not see this employee
    pub async fn get_employee_detail(
        &self,
        viewer: &EmployeeModel,
        employee_id: i32,
    ) -> Result<EmployeeDetailDto, Error> {
        let employee = EmployeeRepository::new(self.db)
            .get_by_id(employee_id)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(employee_id))?;

        let is_self = viewer.id == employee.id;
        let supervises =
            viewer.role == EmployeeRole::Supervisor && viewer.tier == employee.tier;
        if !is_self && !supervises {
            return Err(DomainError::PermissionDenied(format!(
                "You cannot view employee {}",
                employee_id
            ))
            .into());
        }

        let history_repo = TicketHistoryRepository::new(self.db);
        let statistics = EmployeeStatisticsDto {
            assigned: history_repo
                .count_tickets_by_employee_and_event(employee.id, HistoryEventKind::Assigned)
                .await?,
            resolved: history_repo
                .count_tickets_by_employee_and_event(employee.id, HistoryEventKind::Resolved)
                .await?,
            pending: TicketStateRepository::new(self.db)
                .count_in_progress_by_employee_id(employee.id)
                .await?,
        };

        let mut seen = HashSet::new();
        let recent_ids: Vec<i32> = history_repo
            .get_many_by_employee_id(employee.id)
            .await?
            .into_iter()
            .map(|entry| entry.ticket_id)
            .filter(|ticket_id| seen.insert(*ticket_id))
            .take(RECENT_TICKETS)
            .collect();

        let recent_tickets = self.recent_tickets(&recent_ids).await?;

        Ok(EmployeeDetailDto {
            employee: employee_dto(employee),
            statistics,
            recent_tickets,
        })
    }

    /// Creates an employee account, tier 1 unless stated otherwise
    pub async fn create_employee(&self, employee: CreateEmployeeDto) -> Result<EmployeeDto, Error> {
        let new_employee = NewEmployee {
            name: required_text("Name", &employee.name, MAX_NAME_LEN)?,
            email: required_text("Email", &employee.email, MAX_EMAIL_LEN)?,
            phone: optional_text("Phone", employee.phone.as_deref(), MAX_PHONE_LEN)?,
            role: employee.role.into(),
            tier: check_tier(employee.tier.unwrap_or(1))?,
        };

        let employee = EmployeeRepository::new(self.db).create(new_employee).await?;

        tracing::info!(
            "Created {:?} {} at tier {}",
            employee.role,
            employee.id,
            employee.tier
        );

        Ok(employee_dto(employee))
    }

    /// Changes an employee's role, tier or active flag.
    ///
    /// Tickets in progress stay with the agent and the tier they were assigned in, so an
    /// employee owning any of them keeps their role, tier and active flag until those
    /// tickets are resolved or escalated.
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)`: The updated employee
    /// - `Err(Error::DomainError(DomainError::NotFound))`: No such employee
    /// - `Err(Error::DomainError(DomainError::Validation))`: Tier outside 1 to 3
    /// - `Err(Error::DomainError(DomainError::InvalidState))`: The change would strand
    ///   tickets in progress with the employee
    pub async fn update_employee(
        &self,
        employee_id: i32,
        changes: UpdateEmployeeDto,
    ) -> Result<EmployeeDto, Error> {
        let changes = EmployeeChanges {
            role: changes.role.map(Into::into),
            tier: changes.tier.map(check_tier).transpose()?,
            active: changes.active,
        };

        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);

        let current = employee_repo
            .get_by_id(employee_id)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(employee_id))?;

        if moves_tickets(&current, &changes) {
            let in_progress = TicketStateRepository::new(&txn)
                .count_in_progress_by_employee_id(employee_id)
                .await?;
            if in_progress > 0 {
                return Err(DomainError::InvalidState(format!(
                    "Employee {} has {} tickets in progress, resolve or escalate them first",
                    employee_id, in_progress
                ))
                .into());
            }
        }

        let employee = employee_repo
            .update(employee_id, changes)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(employee_id))?;

        txn.commit().await?;

        tracing::info!("Updated employee {}", employee.id);

        Ok(employee_dto(employee))
    }

    /// Deletes an employee who never worked on a ticket.
    ///
    /// History entries reference the employee who acted, so employees that appear in any
    /// ticket history are deactivated instead.
    ///
    /// # Returns
    /// - `Ok(())`: The employee is gone
    /// - `Err(Error::DomainError(DomainError::NotFound))`: No such employee
    /// - `Err(Error::DomainError(DomainError::InvalidState))`: The employee appears in ticket history
    pub async fn delete_employee(&self, employee_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);

        if employee_repo.get_by_id(employee_id).await?.is_none() {
            return Err(DomainError::employee_not_found(employee_id).into());
        }

        let entries = TicketHistoryRepository::new(&txn)
            .count_by_employee_id(employee_id)
            .await?;
        if entries > 0 {
            return Err(DomainError::InvalidState(format!(
                "Employee {} appears in {} ticket history entries, deactivate them instead",
                employee_id, entries
            ))
            .into());
        }

        employee_repo.delete_by_id(employee_id).await?;
        txn.commit().await?;

        tracing::info!("Deleted employee {}", employee_id);

        Ok(())
    }

    /// Summaries of the provided tickets, in the provided order
    async fn recent_tickets(
        &self,
        ticket_ids: &[i32],
    ) -> Result<Vec<TicketSummaryDto>, Error> {
        let state_repo = TicketStateRepository::new(self.db);
        let tickets = TicketRepository::new(self.db).get_many_by_ids(ticket_ids).await?;

        let mut rows = Vec::with_capacity(ticket_ids.len());
        for ticket_id in ticket_ids {
            let Some(ticket) = tickets.iter().find(|ticket| ticket.id == *ticket_id) else {
                continue;
            };
            let Some(state) = state_repo.get_by_ticket_id(*ticket_id).await? else {
                continue;
            };

            rows.push((state, ticket.clone()));
        }

        Ok(summary_dtos(self.db, &rows).await?)
    }
}

/// Whether `changes` take the employee away from the tickets they work on
fn moves_tickets(current: &EmployeeModel, changes: &EmployeeChanges) -> bool {
    changes.role.is_some_and(|role| role != current.role)
        || changes.tier.is_some_and(|tier| tier != current.tier)
        || (current.active && changes.active == Some(false))
}

fn check_tier(tier: i32) -> Result<i32, DomainError> {
    if !(1..=MAX_TIER).contains(&tier) {
        return Err(DomainError::Validation(format!(
            "Tier must be between 1 and {}, got {}",
            MAX_TIER, tier
        )));
    }

    Ok(tier)
}

fn employee_dto(employee: EmployeeModel) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name,
        email: employee.email,
        phone: employee.phone,
        role: employee.role.into(),
        tier: employee.tier,
        active: employee.active,
    }
}
