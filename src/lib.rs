//! Support desk backend for the Chibcha hosting reseller.
//!
//! `model` holds the DTOs exchanged over the HTTP API, `server` holds everything that
//! runs on the backend: routing, controllers, services, repositories and errors.

pub mod model;
pub mod server;
