use chibcha::{
    model::ticket::TicketStatusDto,
    server::data::ticket::history::TicketHistoryRepository,
};
use entity::sea_orm_active_enums::Status;

use super::*;

/// Tests resolution by the owning agent with a comment.
///
/// Expected: Ok with a terminal Resolved entry carrying the comment
#[tokio::test]
async fn owner_resolves_ticket() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let action = TicketService::new(&test.db)
        .resolve_ticket(&agent, ticket_id, Some("DNS corregido"), None)
        .await
        .unwrap();

    assert_eq!(action.status, TicketStatusDto::Resolved);
    let latest = TicketHistoryRepository::new(&test.db)
        .get_latest_by_ticket_id(ticket_id)
        .await?
        .unwrap();
    assert_eq!(latest.status_id, Status::Resolved);
    assert_eq!(latest.employee_id, Some(TIER_1_AGENT));
    assert_eq!(latest.description, "Resuelto por Tier 1 agent: DNS corregido");

    let state = ticket_state(&test, ticket_id).await?;
    assert_eq!(state.status_id, Status::Resolved);
    assert_eq!(state.employee_id, Some(TIER_1_AGENT));

    Ok(())
}

/// Tests resolution without a comment.
///
/// Expected: Ok with the bare description
#[tokio::test]
async fn resolves_without_comment() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;

    TicketService::new(&test.db)
        .resolve_ticket(&agent, ticket_id, Some("   "), None)
        .await
        .unwrap();

    let latest = TicketHistoryRepository::new(&test.db)
        .get_latest_by_ticket_id(ticket_id)
        .await?
        .unwrap();
    assert_eq!(latest.description, "Resuelto por Tier 1 agent");

    Ok(())
}

/// Tests resolution by an agent that does not own the ticket.
///
/// Expected: Err with DomainError::PermissionDenied and no entry appended
#[tokio::test]
async fn rejects_non_owner() -> Result<(), TestError> {
    let mut test = support_desk().await?;
    let other_agent = test.employee().insert_agent(1).await?;
    let ticket_id = open_assigned_ticket(&test).await?;

    let result = TicketService::new(&test.db)
        .resolve_ticket(&other_agent, ticket_id, None, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 2);

    Ok(())
}

/// Tests that supervisors cannot resolve tickets.
///
/// Expected: Err with DomainError::PermissionDenied
#[tokio::test]
async fn rejects_supervisor() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let supervisor = employee(&test, TIER_1_SUPERVISOR).await?;

    let result = TicketService::new(&test.db)
        .resolve_ticket(&supervisor, ticket_id, None, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));

    Ok(())
}

/// Tests resolving a ticket twice.
///
/// Expected: Err with DomainError::InvalidState on the second attempt
#[tokio::test]
async fn rejects_resolved_ticket() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;
    let service = TicketService::new(&test.db);

    service
        .resolve_ticket(&agent, ticket_id, None, None)
        .await
        .unwrap();
    let result = service.resolve_ticket(&agent, ticket_id, None, None).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 3);

    Ok(())
}

/// Tests a comment over 200 characters.
///
/// Expected: Err with DomainError::Validation
#[tokio::test]
async fn rejects_long_comment() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let result = TicketService::new(&test.db)
        .resolve_ticket(&agent, ticket_id, Some(&"x".repeat(201)), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Validation(_)))
    ));

    Ok(())
}
