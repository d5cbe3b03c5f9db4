//! Data transfer objects shared by the HTTP API and its consumers.

pub mod account;
pub mod api;
pub mod employee;
pub mod ticket;
