//! Server application core modules.
//!
//! This module contains the backend of the Chibcha support desk: HTTP routing, session
//! account resolution, database repositories, the ticket action engine and the role-scoped
//! dashboards.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
