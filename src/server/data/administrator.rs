use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AdministratorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdministratorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::administrator::Model>, DbErr> {
        entity::prelude::Administrator::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Stamps the administrator's last access with the current time
    pub async fn touch_last_access(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Administrator::update_many()
            .col_expr(
                entity::administrator::Column::LastAccess,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::administrator::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Administrators whose name or email contain `search`, ordered by ID
    pub async fn get_many(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::administrator::Model>, DbErr> {
        let mut query = entity::prelude::Administrator::find();
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::administrator::Column::Name.contains(search))
                    .add(entity::administrator::Column::Email.contains(search)),
            );
        }

        query
            .order_by_asc(entity::administrator::Column::Id)
            .all(self.db)
            .await
    }
}
