//! Service layer.
//!
//! Services hold the business rules and coordinate repositories; controllers only resolve
//! the session account and translate DTOs.

pub mod account;
pub mod customer;
pub mod employee;
pub mod retry;
pub mod ticket;
