//! Ticket actions.
//!
//! Each action runs in one transaction: read the ticket's state row, check the caller and
//! the ticket against the action's preconditions, append a history entry, then advance the
//! state row on the condition that its head is still the one that was read. A failed
//! precondition or a moved head drops the transaction, so nothing is persisted.

use chrono::Utc;
use entity::sea_orm_active_enums::{EmployeeRole, Status};
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::{
    model::ticket::ActionDto,
    server::{
        data::{
            employee::EmployeeRepository,
            ticket::{history::TicketHistoryRepository, state::TicketStateRepository, TicketRepository},
        },
        error::{domain::DomainError, Error},
        model::{
            db::{EmployeeModel, TicketHistoryModel, TicketStateModel},
            ticket::{HistoryEvent, MAX_TIER},
        },
        service::ticket::{TicketService, MAX_COMMENT_LEN, MAX_DESCRIPTION_LEN},
        util::validation::{fit_description, optional_text, required_text},
    },
};

impl<'a> TicketService<'a> {
    /// Hands a waiting ticket to an agent of the supervisor's tier.
    ///
    /// # Arguments
    /// - `supervisor`: The acting employee, must be an active supervisor
    /// - `ticket_id`: Ticket waiting in the supervisor's tier queue
    /// - `agent_id`: Active agent of the supervisor's tier
    /// - `expected_entry_id`: Head entry the caller last saw, if any
    ///
    /// # Returns
    /// - `Ok(ActionDto)`: The ticket is in progress with the agent
    /// - `Err(Error::DomainError(_))`: `PermissionDenied`, `NotFound`, `Validation`,
    ///   `InvalidState` or `Conflict`; nothing was written. A ticket that is already in
    ///   progress is a `Conflict`, whether or not `expected_entry_id` was sent
    pub async fn assign_ticket(
        &self,
        supervisor: &EmployeeModel,
        ticket_id: i32,
        agent_id: i32,
        expected_entry_id: Option<i32>,
    ) -> Result<ActionDto, Error> {
        if supervisor.role != EmployeeRole::Supervisor || !supervisor.active {
            return Err(DomainError::PermissionDenied(
                "Only active supervisors can assign tickets".to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let state = load_state(&txn, ticket_id).await?;
        check_expected_head(&state, expected_entry_id)?;

        let agent = EmployeeRepository::new(&txn)
            .get_by_id(agent_id)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(agent_id))?;
        if agent.role != EmployeeRole::Agent || !agent.active {
            return Err(DomainError::Validation(format!(
                "Employee {} is not an active agent",
                agent.id
            ))
            .into());
        }
        if agent.tier != supervisor.tier {
            return Err(DomainError::PermissionDenied(format!(
                "Agent {} works at tier {}, you supervise tier {}",
                agent.id, agent.tier, supervisor.tier
            ))
            .into());
        }
        match state.status_id {
            Status::Waiting if state.queue_tier == Some(supervisor.tier) => {}
            // Another supervisor took the ticket after it was read
            Status::InProgress => {
                return Err(DomainError::Conflict {
                    ticket_id: state.ticket_id,
                }
                .into())
            }
            _ => {
                return Err(DomainError::InvalidState(format!(
                    "Ticket {} is not waiting in the tier {} queue",
                    ticket_id, supervisor.tier
                ))
                .into())
            }
        }

        let event = HistoryEvent::Assigned {
            agent_id: agent.id,
            tier: agent.tier,
        };
        let description = format!(
            "Asignado por el supervisor {} al agente {}",
            supervisor.name, agent.name
        );
        let entry = advance(&txn, &state, event, description).await?;

        txn.commit().await?;

        tracing::info!(
            "Supervisor {} assigned ticket {} to agent {} (entry {})",
            supervisor.id,
            ticket_id,
            agent.id,
            entry.id
        );

        Ok(action_dto(
            ticket_id,
            &entry,
            format!("Ticket {} assigned to {}", ticket_id, agent.name),
        ))
    }

    /// Closes a ticket owned by the calling agent.
    ///
    /// # Returns
    /// - `Ok(ActionDto)`: The ticket is resolved
    /// - `Err(Error::DomainError(_))`: `PermissionDenied` for non agents or non owners, `NotFound`,
    ///   `InvalidState` unless in progress, `Validation` for an overlong comment or `Conflict`
    pub async fn resolve_ticket(
        &self,
        agent: &EmployeeModel,
        ticket_id: i32,
        comment: Option<&str>,
        expected_entry_id: Option<i32>,
    ) -> Result<ActionDto, Error> {
        require_active_agent(agent, "resolve")?;
        let comment = optional_text("Comment", comment, MAX_COMMENT_LEN)?;

        let txn = self.db.begin().await?;
        let state = load_state(&txn, ticket_id).await?;
        check_expected_head(&state, expected_entry_id)?;
        require_owner(agent, &state)?;
        require_in_progress(&state)?;

        let event = HistoryEvent::Resolved {
            agent_id: agent.id,
            tier: owner_tier(&state)?,
        };
        let description = match comment {
            Some(comment) => format!("Resuelto por {}: {}", agent.name, comment),
            None => format!("Resuelto por {}", agent.name),
        };
        let entry = advance(&txn, &state, event, description).await?;

        txn.commit().await?;

        tracing::info!(
            "Agent {} resolved ticket {} (entry {})",
            agent.id,
            ticket_id,
            entry.id
        );

        Ok(action_dto(
            ticket_id,
            &entry,
            format!("Ticket {} resolved", ticket_id),
        ))
    }

    /// Sends a ticket owned by the calling agent to the next tier's queue.
    ///
    /// # Returns
    /// - `Ok(ActionDto)`: The ticket waits in the queue above the tier it was assigned in
    /// - `Err(Error::DomainError(_))`: `PermissionDenied` for non agents or non owners, `NotFound`,
    ///   `InvalidState` at the top tier or unless in progress, `Validation` for a missing or
    ///   overlong reason, or `Conflict`
    pub async fn escalate_ticket(
        &self,
        agent: &EmployeeModel,
        ticket_id: i32,
        comment: &str,
        expected_entry_id: Option<i32>,
    ) -> Result<ActionDto, Error> {
        require_active_agent(agent, "escalate")?;

        let txn = self.db.begin().await?;
        let state = load_state(&txn, ticket_id).await?;
        check_expected_head(&state, expected_entry_id)?;
        require_owner(agent, &state)?;
        require_in_progress(&state)?;

        let from_tier = owner_tier(&state)?;
        if from_tier >= MAX_TIER {
            return Err(DomainError::InvalidState(format!(
                "Tier {} is the highest tier, tickets cannot be escalated further",
                from_tier
            ))
            .into());
        }
        let to_tier = from_tier + 1;

        let comment = required_text("Escalation reason", comment, MAX_COMMENT_LEN)?;

        let event = HistoryEvent::Escalated { from_tier, to_tier };
        let description = format!(
            "Escalado del nivel {} al nivel {} por {}: {}",
            from_tier, to_tier, agent.name, comment
        );
        let entry = advance(&txn, &state, event, description).await?;

        txn.commit().await?;

        tracing::info!(
            "Agent {} escalated ticket {} to tier {} (entry {})",
            agent.id,
            ticket_id,
            to_tier,
            entry.id
        );

        Ok(action_dto(
            ticket_id,
            &entry,
            format!("Ticket {} escalated to tier {}", ticket_id, to_tier),
        ))
    }
}

/// State row of an existing ticket
async fn load_state(txn: &DatabaseTransaction, ticket_id: i32) -> Result<TicketStateModel, Error> {
    if let Some(state) = TicketStateRepository::new(txn)
        .get_by_ticket_id(ticket_id)
        .await?
    {
        return Ok(state);
    }

    match TicketRepository::new(txn).get_by_id(ticket_id).await? {
        None => Err(DomainError::ticket_not_found(ticket_id).into()),
        Some(_) => Err(Error::InternalError(format!(
            "Ticket {} exists without a state row",
            ticket_id
        ))),
    }
}

fn check_expected_head(
    state: &TicketStateModel,
    expected_entry_id: Option<i32>,
) -> Result<(), DomainError> {
    match expected_entry_id {
        Some(expected) if expected != state.head_entry_id => Err(DomainError::Conflict {
            ticket_id: state.ticket_id,
        }),
        _ => Ok(()),
    }
}

fn require_active_agent(employee: &EmployeeModel, action: &str) -> Result<(), DomainError> {
    if employee.role != EmployeeRole::Agent || !employee.active {
        return Err(DomainError::PermissionDenied(format!(
            "Only active agents can {} tickets",
            action
        )));
    }

    Ok(())
}

fn require_owner(agent: &EmployeeModel, state: &TicketStateModel) -> Result<(), DomainError> {
    if state.employee_id != Some(agent.id) {
        return Err(DomainError::PermissionDenied(format!(
            "Ticket {} is not your ticket",
            state.ticket_id
        )));
    }

    Ok(())
}

/// Tier the ticket was assigned in, which stays fixed until it leaves that tier
fn owner_tier(state: &TicketStateModel) -> Result<i32, Error> {
    state.owner_tier.ok_or_else(|| {
        Error::InternalError(format!(
            "Ticket {} is in progress without an owner tier",
            state.ticket_id
        ))
    })
}

fn require_in_progress(state: &TicketStateModel) -> Result<(), DomainError> {
    if state.status_id != Status::InProgress {
        return Err(DomainError::InvalidState(format!(
            "Ticket {} is {}, not in progress",
            state.ticket_id,
            state.status_id.label()
        )));
    }

    Ok(())
}

/// Appends the entry for `event` and moves the state row onto it
///
/// # Returns
/// - `Ok(Model)`: The appended entry
/// - `Err(Error::DomainError(DomainError::Conflict))`: The head moved after `state` was read
async fn advance(
    txn: &DatabaseTransaction,
    state: &TicketStateModel,
    event: HistoryEvent,
    description: String,
) -> Result<TicketHistoryModel, Error> {
    let today = Utc::now().date_naive();

    let entry = TicketHistoryRepository::new(txn)
        .append(
            state.ticket_id,
            &event,
            &fit_description(description, MAX_DESCRIPTION_LEN),
            today,
        )
        .await?;

    let advanced = TicketStateRepository::new(txn)
        .advance(
            state.ticket_id,
            state.head_entry_id,
            entry.id,
            event.projection(),
            today,
        )
        .await?;
    if !advanced {
        return Err(DomainError::Conflict {
            ticket_id: state.ticket_id,
        }
        .into());
    }

    Ok(entry)
}

fn action_dto(ticket_id: i32, entry: &TicketHistoryModel, message: String) -> ActionDto {
    ActionDto {
        success: true,
        message,
        ticket_id,
        entry_id: entry.id,
        status: entry.status_id.into(),
    }
}
