//! Server application models and type definitions.
//!
//! Application state, database model type aliases, the session-resolved account and the
//! tagged history events that drive the ticket state machine.

pub mod account;
pub mod app;
pub mod db;
pub mod session;
pub mod ticket;
