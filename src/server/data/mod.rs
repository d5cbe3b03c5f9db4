//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! the ticket action engine can run them inside a database transaction.

pub mod administrator;
pub mod customer;
pub mod employee;
pub mod ticket;
