use chrono::Utc;
use entity::sea_orm_active_enums::EmployeeRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Fields of a new employee account
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub tier: i32,
}

/// Changes to an employee account, `None` leaves the field untouched
#[derive(Default)]
pub struct EmployeeChanges {
    pub role: Option<EmployeeRole>,
    pub tier: Option<i32>,
    pub active: Option<bool>,
}

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, employee: NewEmployee) -> Result<entity::employee::Model, DbErr> {
        let employee = entity::employee::ActiveModel {
            name: ActiveValue::Set(employee.name),
            email: ActiveValue::Set(employee.email),
            phone: ActiveValue::Set(employee.phone),
            role: ActiveValue::Set(employee.role),
            tier: ActiveValue::Set(employee.tier),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        employee.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::employee::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Active agents of a tier, ordered by name
    pub async fn get_active_agents_by_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::Role.eq(EmployeeRole::Agent))
            .filter(entity::employee::Column::Tier.eq(tier))
            .filter(entity::employee::Column::Active.eq(true))
            .order_by_asc(entity::employee::Column::Name)
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies changes to an employee
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated employee
    /// - `Ok(None)`: No employee with the provided ID exists
    pub async fn update(
        &self,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        let Some(employee) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut employee: entity::employee::ActiveModel = employee.into();
        if let Some(role) = changes.role {
            employee.role = ActiveValue::Set(role);
        }
        if let Some(tier) = changes.tier {
            employee.tier = ActiveValue::Set(tier);
        }
        if let Some(active) = changes.active {
            employee.active = ActiveValue::Set(active);
        }

        Ok(Some(employee.update(self.db).await?))
    }

    /// Employees whose name or email contain `search`, ordered by ID
    pub async fn get_many(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::employee::Model>, DbErr> {
        let mut query = entity::prelude::Employee::find();
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::employee::Column::Name.contains(search))
                    .add(entity::employee::Column::Email.contains(search)),
            );
        }

        query
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await
    }

    /// # Returns
    /// - `Ok(true)`: The employee was deleted
    /// - `Ok(false)`: No employee with the provided ID exists
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
