//! Helpers shared by controllers.

pub mod get_account;
