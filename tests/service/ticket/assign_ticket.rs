use chibcha::{
    model::ticket::TicketStatusDto,
    server::data::ticket::history::TicketHistoryRepository,
};
use entity::sea_orm_active_enums::Status;

use super::*;

/// Tests assignment to an agent of the supervisor's tier.
///
/// Expected: Ok with the ticket in progress with the agent
#[tokio::test]
async fn assigns_to_same_tier_agent() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let action = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_1_AGENT, None)
        .await
        .unwrap();

    assert!(action.success);
    assert_eq!(action.status, TicketStatusDto::InProgress);

    let latest = TicketHistoryRepository::new(&test.db)
        .get_latest_by_ticket_id(ticket_id)
        .await?
        .unwrap();
    assert_eq!(latest.id, action.entry_id);
    assert_eq!(latest.employee_id, Some(TIER_1_AGENT));
    assert_eq!(latest.status_id, Status::InProgress);
    assert_eq!(
        latest.description,
        "Asignado por el supervisor Tier 1 supervisor al agente Tier 1 agent"
    );

    let state = ticket_state(&test, ticket_id).await?;
    assert_eq!(state.head_entry_id, action.entry_id);
    assert_eq!(state.owner_tier, Some(1));
    assert_eq!(state.queue_tier, None);

    Ok(())
}

/// Tests assignment to an agent of another tier.
///
/// Expected: Err with DomainError::PermissionDenied and no entry appended
#[tokio::test]
async fn rejects_cross_tier_agent() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_2_AGENT, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 1);

    Ok(())
}

/// Tests that agents cannot assign tickets.
///
/// Expected: Err with DomainError::PermissionDenied
#[tokio::test]
async fn rejects_agent_caller() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&agent, ticket_id, TIER_1_AGENT, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));

    Ok(())
}

/// Tests assignment to an employee that is not an agent.
///
/// Expected: Err with DomainError::Validation
#[tokio::test]
async fn rejects_supervisor_as_assignee() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_1_SUPERVISOR, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Validation(_)))
    ));

    Ok(())
}

/// Tests assignment of unknown tickets and to unknown agents.
///
/// Expected: Err with DomainError::NotFound in both cases
#[tokio::test]
async fn rejects_unknown_ticket_and_agent() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;
    let service = TicketService::new(&test.db);

    let unknown_ticket = service
        .assign_ticket(&supervisor, ticket_id + 1, TIER_1_AGENT, None)
        .await;
    let unknown_agent = service.assign_ticket(&supervisor, ticket_id, 99, None).await;

    assert!(matches!(
        unknown_ticket,
        Err(Error::DomainError(DomainError::NotFound { entity: "Ticket", .. }))
    ));
    assert!(matches!(
        unknown_agent,
        Err(Error::DomainError(DomainError::NotFound { entity: "Employee", id: 99 }))
    ));

    Ok(())
}

/// Tests that a tier 2 supervisor cannot take a ticket from the tier 1 queue.
///
/// Expected: Err with DomainError::InvalidState
#[tokio::test]
async fn rejects_ticket_outside_supervisor_queue() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let supervisor = employee(&test, TIER_2_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_2_AGENT, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));

    Ok(())
}

/// Tests assigning a ticket that is already in progress.
///
/// Expected: Err with DomainError::Conflict and a single assignment in the history
#[tokio::test]
async fn rejects_second_assignment() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_1_AGENT, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Conflict { .. }))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 2);

    Ok(())
}

/// Tests assigning a resolved ticket.
///
/// Expected: Err with DomainError::InvalidState
#[tokio::test]
async fn rejects_resolved_ticket() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;
    let service = TicketService::new(&test.db);
    service
        .resolve_ticket(&agent, ticket_id, None, None)
        .await
        .unwrap();

    let result = service
        .assign_ticket(&supervisor, ticket_id, TIER_1_AGENT, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));

    Ok(())
}

/// Tests assignment with an outdated expected head entry.
///
/// Expected: Err with DomainError::Conflict and nothing written
#[tokio::test]
async fn rejects_stale_expected_entry() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let head = ticket_state(&test, ticket_id).await?.head_entry_id;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .assign_ticket(&supervisor, ticket_id, TIER_1_AGENT, Some(head + 1))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Conflict { .. }))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 1);

    Ok(())
}
