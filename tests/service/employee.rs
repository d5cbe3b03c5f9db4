use chibcha::{
    model::employee::{EmployeeRoleDto, UpdateEmployeeDto},
    server::{
        data::ticket::history::TicketHistoryRepository, service::employee::EmployeeService,
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use super::*;

/// Opens a ticket and assigns it to the tier 1 agent
async fn assign_to_tier_1_agent(test: &TestContext) -> Result<i32, TestError> {
    let service = TicketService::new(&test.db);
    let ticket_id = service
        .create_ticket(1, "Correo", "No llegan los mensajes")
        .await
        .unwrap()
        .id;
    let supervisor = employee(test, TIER_1_SUPERVISOR).await?;

    service
        .assign_ticket(&supervisor, ticket_id, TIER_1_AGENT, None)
        .await
        .unwrap();

    Ok(ticket_id)
}

async fn assert_dashboards_match(test: &TestContext, employee_id: i32) -> Result<(), TestError> {
    let employee = employee(test, employee_id).await?;
    let service = DashboardService::new(&test.db);

    let projected = service.get_dashboard_tickets(&employee).await.unwrap();
    let rebuilt = service.rebuild_dashboard_tickets(&employee).await.unwrap();
    assert_eq!(projected, rebuilt);

    Ok(())
}

/// Tests moving an agent to another tier while they own a ticket in progress.
///
/// Expected: Err with DomainError::InvalidState, the tier is unchanged and the dashboards
/// derived from history still match the stored ones
#[tokio::test]
async fn refuses_tier_change_with_tickets_in_progress() -> Result<(), TestError> {
    let test = support_desk().await?;
    assign_to_tier_1_agent(&test).await?;

    let result = EmployeeService::new(&test.db)
        .update_employee(
            TIER_1_AGENT,
            UpdateEmployeeDto {
                tier: Some(2),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));
    assert_eq!(employee(&test, TIER_1_AGENT).await?.tier, 1);
    for supervisor_id in [TIER_1_SUPERVISOR, TIER_2_SUPERVISOR] {
        assert_dashboards_match(&test, supervisor_id).await?;
    }

    Ok(())
}

/// Tests promoting an agent to supervisor while they own a ticket in progress.
///
/// Expected: Err with DomainError::InvalidState
#[tokio::test]
async fn refuses_role_change_with_tickets_in_progress() -> Result<(), TestError> {
    let test = support_desk().await?;
    assign_to_tier_1_agent(&test).await?;

    let result = EmployeeService::new(&test.db)
        .update_employee(
            TIER_1_AGENT,
            UpdateEmployeeDto {
                role: Some(EmployeeRoleDto::Supervisor),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));

    Ok(())
}

/// Tests deactivating an agent before and after they resolve their ticket.
///
/// Expected: InvalidState while the ticket is in progress, then Ok
#[tokio::test]
async fn deactivates_agent_once_tickets_are_resolved() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = assign_to_tier_1_agent(&test).await?;
    let service = EmployeeService::new(&test.db);
    let deactivate = || UpdateEmployeeDto {
        active: Some(false),
        ..Default::default()
    };

    let refused = service.update_employee(TIER_1_AGENT, deactivate()).await;
    assert!(matches!(
        refused,
        Err(Error::DomainError(DomainError::InvalidState(_)))
    ));

    let agent = employee(&test, TIER_1_AGENT).await?;
    TicketService::new(&test.db)
        .resolve_ticket(&agent, ticket_id, None, None)
        .await
        .unwrap();

    let updated = service
        .update_employee(TIER_1_AGENT, deactivate())
        .await
        .unwrap();
    assert!(!updated.active);

    Ok(())
}

/// Tests changes that leave the employee's tickets where they are.
///
/// Expected: Ok for an agent without tickets and for restating an owner's current values
#[tokio::test]
async fn allows_changes_that_keep_tickets() -> Result<(), TestError> {
    let test = support_desk().await?;
    assign_to_tier_1_agent(&test).await?;
    let service = EmployeeService::new(&test.db);

    let moved = service
        .update_employee(
            TIER_2_AGENT,
            UpdateEmployeeDto {
                tier: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.tier, 3);

    let restated = service
        .update_employee(
            TIER_1_AGENT,
            UpdateEmployeeDto {
                role: Some(EmployeeRoleDto::Agent),
                tier: Some(1),
                active: Some(true),
            },
        )
        .await
        .unwrap();
    assert_eq!(restated.tier, 1);

    Ok(())
}

/// Tests escalation by an agent whose tier changed after the assignment.
///
/// Expected: The ticket moves one tier above the tier it was assigned in
#[tokio::test]
async fn escalates_from_assignment_tier() -> Result<(), TestError> {
    let test = support_desk().await?;
    let ticket_id = assign_to_tier_1_agent(&test).await?;

    let mut agent: entity::employee::ActiveModel = employee(&test, TIER_1_AGENT).await?.into();
    agent.tier = ActiveValue::Set(2);
    let agent = agent.update(&test.db).await?;

    TicketService::new(&test.db)
        .escalate_ticket(&agent, ticket_id, "Requiere soporte de red", None)
        .await
        .unwrap();

    let latest = TicketHistoryRepository::new(&test.db)
        .get_latest_by_ticket_id(ticket_id)
        .await?
        .unwrap();
    assert_eq!(latest.target_tier, Some(2));
    assert!(latest.description.contains("del nivel 1 al nivel 2"));
    let state = entity::prelude::TicketState::find_by_id(ticket_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(state.queue_tier, Some(2));

    Ok(())
}
