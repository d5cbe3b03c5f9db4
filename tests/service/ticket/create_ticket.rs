use chibcha::server::data::ticket::history::TicketHistoryRepository;
use entity::sea_orm_active_enums::{HistoryEventKind, Status};

use super::*;

/// Tests that a new ticket starts with a single waiting entry.
///
/// Expected: Ok with one Created entry, no employee, and a state row queued at tier 1
#[tokio::test]
async fn creates_ticket_with_single_waiting_entry() -> Result<(), TestError> {
    let test = support_desk().await?;

    let ticket = TicketService::new(&test.db)
        .create_ticket(1, "  DNS  ", "El dominio no resuelve")
        .await
        .unwrap();

    assert_eq!(ticket.title, "DNS");
    assert_eq!(ticket.status_name, "En espera");

    let history = TicketHistoryRepository::new(&test.db)
        .get_many_by_ticket_id(ticket.id)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].event, HistoryEventKind::Created);
    assert_eq!(history[0].status_id, Status::Waiting);
    assert_eq!(history[0].employee_id, None);
    assert_eq!(history[0].description, "Ticket creado por el cliente acme");

    let state = ticket_state(&test, ticket.id).await?;
    assert_eq!(state.head_entry_id, history[0].id);
    assert_eq!(state.queue_tier, Some(1));
    assert_eq!(state.employee_id, None);

    Ok(())
}

/// Tests that a blank title is rejected before anything is written.
///
/// Expected: Err with DomainError::Validation and no ticket stored
#[tokio::test]
async fn rejects_blank_title() -> Result<(), TestError> {
    let test = support_desk().await?;

    let result = TicketService::new(&test.db)
        .create_ticket(1, "   ", "El dominio no resuelve")
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Validation(_)))
    ));
    let tickets = TicketService::new(&test.db).get_customer_tickets(1).await.unwrap();
    assert!(tickets.is_empty());

    Ok(())
}

/// Tests the description length limit of 250 characters.
///
/// Expected: Ok at 250 characters, Err with DomainError::Validation at 251
#[tokio::test]
async fn enforces_description_limit() -> Result<(), TestError> {
    let test = support_desk().await?;
    let service = TicketService::new(&test.db);

    let at_limit = service.create_ticket(1, "DNS", &"a".repeat(250)).await;
    let over_limit = service.create_ticket(1, "DNS", &"a".repeat(251)).await;

    assert!(at_limit.is_ok());
    assert!(matches!(
        over_limit,
        Err(Error::DomainError(DomainError::Validation(_)))
    ));

    Ok(())
}

/// Tests ticket creation for a customer that does not exist.
///
/// Expected: Err with DomainError::NotFound
#[tokio::test]
async fn rejects_unknown_customer() -> Result<(), TestError> {
    let test = support_desk().await?;

    let result = TicketService::new(&test.db)
        .create_ticket(42, "DNS", "El dominio no resuelve")
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound { id: 42, .. }))
    ));

    Ok(())
}

/// Tests that customers see their tickets newest first with the current status.
///
/// Expected: Ok with the second ticket first, both waiting
#[tokio::test]
async fn lists_customer_tickets() -> Result<(), TestError> {
    let test = support_desk().await?;
    let first = open_ticket(&test).await;
    let second = open_ticket(&test).await;

    let tickets = TicketService::new(&test.db).get_customer_tickets(1).await.unwrap();

    let ids: Vec<i32> = tickets.iter().map(|ticket| ticket.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(tickets.iter().all(|ticket| ticket.status_name == "En espera"));

    Ok(())
}
