//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/account` - Account of the current session
/// - `GET /api/auth/logout` - Clear the current session
/// - `POST /api/tickets`, `GET /api/tickets` - Customer ticket creation and listing
/// - `GET /api/tickets/{id}` - Ticket detail with history
/// - `POST /api/tickets/{id}/assign|resolve|escalate` - Ticket actions
/// - `GET /api/employee/dashboard`, `GET /api/employee/agents`, `GET /api/employee/{id}`
/// - `GET /api/admin/accounts` - Account list with type filter and search
/// - `POST /api/admin/employees`, `PUT|DELETE /api/admin/employees/{id}`
/// - `POST /api/admin/customers`, `DELETE /api/admin/customers/{id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Chibcha", description = "Chibcha support desk API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session account routes"),
        (name = controller::ticket::TICKET_TAG, description = "Ticket creation, detail and actions"),
        (name = controller::employee::EMPLOYEE_TAG, description = "Employee dashboards and profiles"),
        (name = controller::admin::ADMIN_TAG, description = "Account management for administrators"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_account))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::ticket::create_ticket,
            controller::ticket::get_tickets
        ))
        .routes(routes!(controller::ticket::get_ticket))
        .routes(routes!(controller::ticket::assign_ticket))
        .routes(routes!(controller::ticket::resolve_ticket))
        .routes(routes!(controller::ticket::escalate_ticket))
        .routes(routes!(controller::employee::get_dashboard))
        .routes(routes!(controller::employee::get_agents))
        .routes(routes!(controller::employee::get_employee))
        .routes(routes!(controller::admin::create_employee))
        .routes(routes!(
            controller::admin::update_employee,
            controller::admin::delete_employee
        ))
        .routes(routes!(controller::admin::list_accounts))
        .routes(routes!(controller::admin::create_customer))
        .routes(routes!(controller::admin::delete_customer))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
