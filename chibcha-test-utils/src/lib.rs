//! Shared test utilities for the Chibcha workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and fixtures
//! are needed, and `build()` returns a [`TestContext`] holding an in-memory SQLite
//! database and a session backed by a memory store.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::ticket::HistoryEntryFixture, TestBuilder, TestContext, TestError};
}
