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
        employee::{EmployeeDetailDto, EmployeeDto},
        ticket::DashboardDto,
    },
    server::{
        controller::util::get_account::get_employee_from_session,
        error::Error,
        model::app::AppState,
        service::{employee::EmployeeService, ticket::dashboard::DashboardService},
    },
};

pub static EMPLOYEE_TAG: &str = "employee";

/// Dashboard of the logged in employee
#[utoipa::path(
    get,
    path = "/api/employee/dashboard",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Tickets visible to the employee", body = DashboardDto),
        (status = 403, description = "Session account is not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let employee = get_employee_from_session(&state, &session).await?;

    let dashboard = DashboardService::new(&state.db)
        .get_dashboard_tickets(&employee)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Active agents of the logged in supervisor's tier
#[utoipa::path(
    get,
    path = "/api/employee/agents",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Agents the supervisor can assign to", body = Vec<EmployeeDto>),
        (status = 403, description = "Session account is not a supervisor", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_agents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let supervisor = get_employee_from_session(&state, &session).await?;

    let agents = EmployeeService::new(&state.db)
        .get_agents_for_supervisor(&supervisor)
        .await?;

    Ok((StatusCode::OK, Json(agents)))
}

/// Employee profile with work statistics and recent tickets
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee detail", body = EmployeeDetailDto),
        (status = 403, description = "Not the employee nor a supervisor of the employee's tier", body = ActionErrorDto),
        (status = 404, description = "Employee not found", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_employee_from_session(&state, &session).await?;

    let detail = EmployeeService::new(&state.db)
        .get_employee_detail(&viewer, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}
