//! Declarative test builder.
//!
//! The builder records which tables and fixtures a test needs; everything is executed in
//! order during the final `build()` call.

use entity::sea_orm_active_enums::EmployeeRole;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ticket_tables: bool,

    customers: Vec<String>,
    employees: Vec<(EmployeeRole, i32)>, // (role, tier)
    administrators: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ticket_tables: false,
            customers: Vec::new(),
            employees: Vec::new(),
            administrators: Vec::new(),
        }
    }

    /// Add every table of the support desk schema.
    ///
    /// Creates the account tables (customer, employee, administrator), the ticket tables
    /// (ticket, ticket_history, ticket_state) and the `ticket_status` lookup table, which
    /// is seeded with the fixed status vocabulary just as the migration does.
    pub fn with_ticket_tables(mut self) -> Self {
        self.include_ticket_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chibcha_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), chibcha_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Customer)
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a customer with the provided nickname.
    pub fn with_customer(mut self, nickname: &str) -> Self {
        self.customers.push(nickname.to_string());
        self
    }

    /// Insert an active agent at the provided tier.
    pub fn with_agent(mut self, tier: i32) -> Self {
        self.employees.push((EmployeeRole::Agent, tier));
        self
    }

    /// Insert an active supervisor at the provided tier.
    pub fn with_supervisor(mut self, tier: i32) -> Self {
        self.employees.push((EmployeeRole::Supervisor, tier));
        self
    }

    /// Insert an active administrator with the provided name.
    pub fn with_administrator(mut self, name: &str) -> Self {
        self.administrators.push(name.to_string());
        self
    }

    /// Build the test context, creating tables then inserting fixtures.
    ///
    /// Fixtures are inserted in declaration order per kind, so the first `with_customer`
    /// call receives ID 1, the first `with_agent`/`with_supervisor` call receives employee
    /// ID 1 and so on.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_ticket_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::Administrator),
                schema.create_table_from_entity(entity::prelude::TicketStatus),
                schema.create_table_from_entity(entity::prelude::Ticket),
                schema.create_table_from_entity(entity::prelude::TicketHistory),
                schema.create_table_from_entity(entity::prelude::TicketState),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_ticket_tables {
            setup.ticket().seed_statuses().await?;
        }

        // 2. Insert database fixtures
        for nickname in self.customers {
            setup.customer().insert_customer(&nickname).await?;
        }

        for (role, tier) in self.employees {
            setup.employee().insert_employee(role, tier, true).await?;
        }

        for name in self.administrators {
            setup.admin().insert_administrator(&name, true).await?;
        }

        Ok(setup)
    }
}
