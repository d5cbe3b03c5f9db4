use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountQueryDto, AccountSummaryDto},
        api::{ActionErrorDto, ErrorDto},
        employee::{CreateCustomerDto, CreateEmployeeDto, CustomerDto, EmployeeDto, UpdateEmployeeDto},
    },
    server::{
        controller::util::get_account::get_administrator_from_session,
        error::Error,
        model::app::AppState,
        service::{account::AccountService, customer::CustomerService, employee::EmployeeService},
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Create an employee account
#[utoipa::path(
    post,
    path = "/api/admin/employees",
    tag = ADMIN_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 422, description = "Invalid employee fields", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    Json(employee): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    let employee = EmployeeService::new(&state.db)
        .create_employee(employee)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Change an employee's role, tier or active flag
#[utoipa::path(
    put,
    path = "/api/admin/employees/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ActionErrorDto),
        (status = 422, description = "Invalid tier", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    let employee = EmployeeService::new(&state.db)
        .update_employee(id, changes)
        .await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Delete an employee who never worked on a ticket
#[utoipa::path(
    delete,
    path = "/api/admin/employees/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ActionErrorDto),
        (status = 409, description = "Employee appears in ticket history", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    EmployeeService::new(&state.db).delete_employee(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List accounts of every type, optionally filtered by type and text
#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = ADMIN_TAG,
    params(AccountQueryDto),
    responses(
        (status = 200, description = "Matching accounts", body = Vec<AccountSummaryDto>),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_accounts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AccountQueryDto>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    let accounts = AccountService::new(&state.db).list_accounts(&query).await?;

    Ok((StatusCode::OK, Json(accounts)))
}

/// Register a customer account
#[utoipa::path(
    post,
    path = "/api/admin/customers",
    tag = ADMIN_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 422, description = "Invalid customer fields or nickname taken", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(customer): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    let customer = CustomerService::new(&state.db)
        .create_customer(customer)
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Delete a customer along with their tickets
#[utoipa::path(
    delete,
    path = "/api/admin/customers/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer and their tickets deleted"),
        (status = 403, description = "Session account is not an administrator", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_administrator_from_session(&state, &session).await?;

    CustomerService::new(&state.db).delete_customer(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
