use chrono::Utc;
use entity::sea_orm_active_enums::EmployeeRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn customer<'a>(&'a mut self) -> CustomerFixtures<'a> {
        CustomerFixtures { setup: self }
    }

    pub fn employee<'a>(&'a mut self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { setup: self }
    }

    pub fn admin<'a>(&'a mut self) -> AdministratorFixtures<'a> {
        AdministratorFixtures { setup: self }
    }
}

pub struct CustomerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CustomerFixtures<'a> {
    pub async fn insert_customer(
        &self,
        nickname: &str,
    ) -> Result<entity::customer::Model, TestError> {
        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                nickname: ActiveValue::Set(nickname.to_string()),
                name: ActiveValue::Set(format!("Customer {}", nickname)),
                email: ActiveValue::Set(format!("{}@example.com", nickname)),
                phone: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

pub struct EmployeeFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> EmployeeFixtures<'a> {
    pub async fn insert_employee(
        &self,
        role: EmployeeRole,
        tier: i32,
        active: bool,
    ) -> Result<entity::employee::Model, TestError> {
        let label = match role {
            EmployeeRole::Agent => "agent",
            EmployeeRole::Supervisor => "supervisor",
        };

        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                name: ActiveValue::Set(format!("Tier {} {}", tier, label)),
                email: ActiveValue::Set(format!("{}{}@chibcha.example", label, tier)),
                phone: ActiveValue::Set(None),
                role: ActiveValue::Set(role),
                tier: ActiveValue::Set(tier),
                active: ActiveValue::Set(active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_agent(&self, tier: i32) -> Result<entity::employee::Model, TestError> {
        self.insert_employee(EmployeeRole::Agent, tier, true).await
    }

    pub async fn insert_supervisor(
        &self,
        tier: i32,
    ) -> Result<entity::employee::Model, TestError> {
        self.insert_employee(EmployeeRole::Supervisor, tier, true)
            .await
    }
}

pub struct AdministratorFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AdministratorFixtures<'a> {
    pub async fn insert_administrator(
        &self,
        name: &str,
        active: bool,
    ) -> Result<entity::administrator::Model, TestError> {
        Ok(
            entity::prelude::Administrator::insert(entity::administrator::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(format!("{}@chibcha.example", name)),
                active: ActiveValue::Set(active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                last_access: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
