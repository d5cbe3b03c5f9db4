use chibcha::{
    model::ticket::TicketStatusDto,
    server::data::ticket::history::TicketHistoryRepository,
};
use entity::sea_orm_active_enums::{HistoryEventKind, Status};

use super::*;

/// Tests escalation from tier 1.
///
/// Expected: Ok with a waiting entry without employee that targets tier 2
#[tokio::test]
async fn escalates_to_next_tier() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let action = TicketService::new(&test.db)
        .escalate_ticket(&agent, ticket_id, "Requiere acceso al servidor", None)
        .await
        .unwrap();

    assert_eq!(action.status, TicketStatusDto::Waiting);
    let latest = TicketHistoryRepository::new(&test.db)
        .get_latest_by_ticket_id(ticket_id)
        .await?
        .unwrap();
    assert_eq!(latest.event, HistoryEventKind::Escalated);
    assert_eq!(latest.status_id, Status::Waiting);
    assert_eq!(latest.employee_id, None);
    assert_eq!(latest.target_tier, Some(2));
    assert!(latest.description.contains("al nivel 2"));
    assert_eq!(
        latest.description,
        "Escalado del nivel 1 al nivel 2 por Tier 1 agent: Requiere acceso al servidor"
    );

    let state = ticket_state(&test, ticket_id).await?;
    assert_eq!(state.queue_tier, Some(2));
    assert_eq!(state.owner_tier, None);
    assert_eq!(state.employee_id, None);

    Ok(())
}

/// Tests escalation from the highest tier.
///
/// Expected: Err with DomainError::InvalidState
#[tokio::test]
async fn rejects_escalation_from_tier_three() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let service = TicketService::new(&test.db);

    for (supervisor_id, agent_id) in [
        (TIER_1_SUPERVISOR, TIER_1_AGENT),
        (TIER_2_SUPERVISOR, TIER_2_AGENT),
    ] {
        let supervisor = employee(&test, supervisor_id).await?;
        let agent = employee(&test, agent_id).await?;
        service
            .assign_ticket(&supervisor, ticket_id, agent_id, None)
            .await
            .unwrap();
        service
            .escalate_ticket(&agent, ticket_id, "Sube de nivel", None)
            .await
            .unwrap();
    }
    let supervisor = employee(&test, TIER_3_SUPERVISOR).await?;
    let agent = employee(&test, TIER_3_AGENT).await?;
    service
        .assign_ticket(&supervisor, ticket_id, TIER_3_AGENT, None)
        .await
        .unwrap();

    let result = service
        .escalate_ticket(&agent, ticket_id, "No hay mas niveles", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 6);

    Ok(())
}

/// Tests escalation without a reason.
///
/// Expected: Err with DomainError::Validation and no entry appended
#[tokio::test]
async fn rejects_missing_reason() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_assigned_ticket(&test).await?;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let result = TicketService::new(&test.db)
        .escalate_ticket(&agent, ticket_id, "  ", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Validation(_)))
    ));
    assert_eq!(history_len(&test, ticket_id).await?, 2);

    Ok(())
}

/// Tests escalation of a ticket owned by another agent.
///
/// Expected: Err with DomainError::PermissionDenied
#[tokio::test]
async fn rejects_non_owner() -> Result<(), TestError> {
    let mut test = support_desk().await?;
    let other_agent = test.employee().insert_agent(1).await?;
    let ticket_id = open_assigned_ticket(&test).await?;

    let result = TicketService::new(&test.db)
        .escalate_ticket(&other_agent, ticket_id, "No es mio", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));

    Ok(())
}

/// Tests escalation of a ticket still waiting for assignment.
///
/// Expected: Err with DomainError::PermissionDenied since no agent owns it
#[tokio::test]
async fn rejects_unassigned_ticket() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = open_ticket(&test).await;
    let agent = employee(&test, TIER_1_AGENT).await?;

    let result = TicketService::new(&test.db)
        .escalate_ticket(&agent, ticket_id, "Sin asignar", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::PermissionDenied(_)))
    ));

    Ok(())
}
