use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        nickname: &str,
        name: &str,
        email: &str,
        phone: Option<String>,
    ) -> Result<entity::customer::Model, DbErr> {
        let customer = entity::customer::ActiveModel {
            nickname: ActiveValue::Set(nickname.to_string()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            phone: ActiveValue::Set(phone),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        customer.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Nickname.eq(nickname))
            .one(self.db)
            .await
    }

    /// Customers whose nickname, name or email contain `search`, ordered by ID
    pub async fn get_many(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::customer::Model>, DbErr> {
        let mut query = entity::prelude::Customer::find();
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::customer::Column::Nickname.contains(search))
                    .add(entity::customer::Column::Name.contains(search))
                    .add(entity::customer::Column::Email.contains(search)),
            );
        }

        query
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a customer, their tickets and ticket history cascade with them
    ///
    /// # Returns
    /// - `Ok(true)`: The customer was deleted
    /// - `Ok(false)`: No customer with the provided ID exists
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
