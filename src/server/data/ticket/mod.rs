//! Ticket repositories.
//!
//! - [`TicketRepository`]: the ticket rows customers submit
//! - [`history::TicketHistoryRepository`]: the append-only transition log and the queries that
//!   derive current state from it
//! - [`state::TicketStateRepository`]: the current-state projection used by dashboards and
//!   as the optimistic concurrency token

pub mod history;
pub mod state;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        customer_id: i32,
        title: &str,
        description: &str,
        created_on: NaiveDate,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.to_string()),
            created_on: ActiveValue::Set(created_on),
            customer_id: ActiveValue::Set(customer_id),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::ticket::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// A customer's tickets with their current state, newest first
    pub async fn get_many_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Vec<(entity::ticket::Model, Option<entity::ticket_state::Model>)>, DbErr> {
        entity::prelude::Ticket::find()
            .find_also_related(entity::prelude::TicketState)
            .filter(entity::ticket::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::ticket::Column::CreatedOn)
            .order_by_desc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }
}
