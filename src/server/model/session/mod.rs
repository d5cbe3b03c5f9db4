//! Session data stored in the tower-sessions store.

pub mod account;
