//! Helpers shared by the integration tests.

use chibcha::server::model::{app::AppState, db::EmployeeModel};
use chibcha_test_utils::prelude::*;
use sea_orm::EntityTrait;

pub const TIER_1_SUPERVISOR: i32 = 1;
pub const TIER_1_AGENT: i32 = 2;
pub const TIER_2_SUPERVISOR: i32 = 3;
pub const TIER_2_AGENT: i32 = 4;
pub const TIER_3_SUPERVISOR: i32 = 5;
pub const TIER_3_AGENT: i32 = 6;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Support desk with customer 1 ("acme") and one supervisor and one agent per tier
///
/// Employee IDs follow the `TIER_*` constants.
pub async fn support_desk() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_ticket_tables()
        .with_customer("acme")
        .with_supervisor(1)
        .with_agent(1)
        .with_supervisor(2)
        .with_agent(2)
        .with_supervisor(3)
        .with_agent(3)
        .build()
        .await
}

pub async fn employee(test: &TestContext, id: i32) -> Result<EmployeeModel, TestError> {
    let employee = entity::prelude::Employee::find_by_id(id)
        .one(&test.db)
        .await?
        .ok_or(TestError::DbErr(sea_orm::DbErr::RecordNotFound(format!(
            "employee {}",
            id
        ))))?;

    Ok(employee)
}

pub async fn history_len(test: &TestContext, ticket_id: i32) -> Result<usize, TestError> {
    use sea_orm::{ColumnTrait, QueryFilter};

    let entries = entity::prelude::TicketHistory::find()
        .filter(entity::ticket_history::Column::TicketId.eq(ticket_id))
        .all(&test.db)
        .await?;

    Ok(entries.len())
}
