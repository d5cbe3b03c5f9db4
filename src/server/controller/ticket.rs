use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ErrorDto},
        ticket::{
            ActionDto, AssignTicketDto, CreateTicketDto, EscalateTicketDto, ResolveTicketDto,
            TicketDetailDto, TicketDto,
        },
    },
    server::{
        controller::util::get_account::{
            get_account_from_session, get_customer_from_session, get_employee_from_session,
        },
        error::Error,
        model::app::AppState,
        service::ticket::TicketService,
    },
};

pub static TICKET_TAG: &str = "ticket";

/// Open a ticket for the logged in customer
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created and waiting for tier 1", body = TicketDto),
        (status = 403, description = "Session account is not a customer", body = ErrorDto),
        (status = 422, description = "Title or description invalid", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Json(ticket): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let customer = get_customer_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db)
        .create_ticket(customer.id, &ticket.title, &ticket.description)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Tickets of the logged in customer, newest first
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "Customer's tickets with their current status", body = Vec<TicketDto>),
        (status = 403, description = "Session account is not a customer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let customer = get_customer_from_session(&state, &session).await?;

    let tickets = TicketService::new(&state.db)
        .get_customer_tickets(customer.id)
        .await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Ticket with its full history
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket and history, oldest entry first", body = TicketDetailDto),
        (status = 403, description = "Account may not view this ticket", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let detail = TicketService::new(&state.db)
        .get_ticket_detail(&account, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Assign a waiting ticket to an agent of the supervisor's tier
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/assign",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = AssignTicketDto,
    responses(
        (status = 200, description = "Ticket assigned", body = ActionDto),
        (status = 403, description = "Not an active supervisor, or agent of another tier", body = ActionErrorDto),
        (status = 404, description = "Ticket or agent not found", body = ActionErrorDto),
        (status = 409, description = "Ticket not waiting in the tier queue, or changed concurrently", body = ActionErrorDto),
        (status = 422, description = "Employee is not an active agent", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<AssignTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let supervisor = get_employee_from_session(&state, &session).await?;

    let action = TicketService::new(&state.db)
        .assign_ticket(&supervisor, id, request.agent_id, request.expected_entry_id)
        .await?;

    Ok((StatusCode::OK, Json(action)))
}

/// Resolve a ticket owned by the logged in agent
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/resolve",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = ResolveTicketDto,
    responses(
        (status = 200, description = "Ticket resolved", body = ActionDto),
        (status = 403, description = "Not an active agent, or not your ticket", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto),
        (status = 409, description = "Ticket not in progress, or changed concurrently", body = ActionErrorDto),
        (status = 422, description = "Comment too long", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<ResolveTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let agent = get_employee_from_session(&state, &session).await?;

    let action = TicketService::new(&state.db)
        .resolve_ticket(
            &agent,
            id,
            request.comment.as_deref(),
            request.expected_entry_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(action)))
}

/// Escalate a ticket owned by the logged in agent to the next tier
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/escalate",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = EscalateTicketDto,
    responses(
        (status = 200, description = "Ticket waiting for the next tier", body = ActionDto),
        (status = 403, description = "Not an active agent, or not your ticket", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto),
        (status = 409, description = "Highest tier, not in progress, or changed concurrently", body = ActionErrorDto),
        (status = 422, description = "Escalation reason missing or too long", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn escalate_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<EscalateTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let agent = get_employee_from_session(&state, &session).await?;

    let action = TicketService::new(&state.db)
        .escalate_ticket(&agent, id, &request.comment, request.expected_entry_id)
        .await?;

    Ok((StatusCode::OK, Json(action)))
}
