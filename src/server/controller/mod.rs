//! HTTP controller endpoints for the Chibcha web API.
//!
//! Controllers resolve the session account, hand the request to a service and return its
//! DTO as JSON. Routes are documented for OpenAPI with utoipa.

pub mod admin;
pub mod auth;
pub mod employee;
pub mod ticket;
pub mod util;
