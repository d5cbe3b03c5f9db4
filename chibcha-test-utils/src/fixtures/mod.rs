//! Database fixtures.
//!
//! Each fixture group is reached through an accessor on [`TestContext`](crate::TestContext)
//! (`test.customer()`, `test.employee()`, `test.admin()`, `test.ticket()`) and inserts rows
//! directly through sea-orm, bypassing the services under test.

pub mod account;
pub mod ticket;
