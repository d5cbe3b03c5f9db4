use chrono::NaiveDate;
use entity::sea_orm_active_enums::Status;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::ticket::TicketProjection;

pub struct TicketStateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketStateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the state row of a new ticket
    pub async fn create(
        &self,
        ticket_id: i32,
        head_entry_id: i32,
        projection: TicketProjection,
        updated_on: NaiveDate,
    ) -> Result<entity::ticket_state::Model, DbErr> {
        let state = entity::ticket_state::ActiveModel {
            ticket_id: ActiveValue::Set(ticket_id),
            head_entry_id: ActiveValue::Set(head_entry_id),
            status_id: ActiveValue::Set(projection.status),
            employee_id: ActiveValue::Set(projection.employee_id),
            owner_tier: ActiveValue::Set(projection.owner_tier),
            queue_tier: ActiveValue::Set(projection.queue_tier),
            updated_on: ActiveValue::Set(updated_on),
        };

        state.insert(self.db).await
    }

    pub async fn get_by_ticket_id(
        &self,
        ticket_id: i32,
    ) -> Result<Option<entity::ticket_state::Model>, DbErr> {
        entity::prelude::TicketState::find_by_id(ticket_id)
            .one(self.db)
            .await
    }

    /// Moves a ticket's state to a new head entry, if the head is still `expected_head`
    ///
    /// # Returns
    /// - `Ok(true)`: The state now points at `new_head`
    /// - `Ok(false)`: The head was moved by someone else, nothing was updated
    pub async fn advance(
        &self,
        ticket_id: i32,
        expected_head: i32,
        new_head: i32,
        projection: TicketProjection,
        updated_on: NaiveDate,
    ) -> Result<bool, DbErr> {
        let state = entity::ticket_state::ActiveModel {
            head_entry_id: ActiveValue::Set(new_head),
            status_id: ActiveValue::Set(projection.status),
            employee_id: ActiveValue::Set(projection.employee_id),
            owner_tier: ActiveValue::Set(projection.owner_tier),
            queue_tier: ActiveValue::Set(projection.queue_tier),
            updated_on: ActiveValue::Set(updated_on),
            ..Default::default()
        };

        let result = entity::prelude::TicketState::update_many()
            .set(state)
            .filter(entity::ticket_state::Column::TicketId.eq(ticket_id))
            .filter(entity::ticket_state::Column::HeadEntryId.eq(expected_head))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Tickets waiting in the queue of `tier` with their ticket rows, oldest first
    pub async fn get_waiting_in_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<(entity::ticket_state::Model, entity::ticket::Model)>, DbErr> {
        let rows = entity::prelude::TicketState::find()
            .find_also_related(entity::prelude::Ticket)
            .filter(entity::ticket_state::Column::StatusId.eq(Status::Waiting))
            .filter(entity::ticket_state::Column::QueueTier.eq(tier))
            .order_by_asc(entity::ticket_state::Column::UpdatedOn)
            .order_by_asc(entity::ticket_state::Column::HeadEntryId)
            .all(self.db)
            .await?;

        Ok(with_tickets(rows))
    }

    /// Tickets in progress with an agent of `tier`, most recently updated first
    pub async fn get_in_progress_at_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<(entity::ticket_state::Model, entity::ticket::Model)>, DbErr> {
        let rows = entity::prelude::TicketState::find()
            .find_also_related(entity::prelude::Ticket)
            .filter(entity::ticket_state::Column::StatusId.eq(Status::InProgress))
            .filter(entity::ticket_state::Column::OwnerTier.eq(tier))
            .order_by_desc(entity::ticket_state::Column::UpdatedOn)
            .order_by_desc(entity::ticket_state::Column::HeadEntryId)
            .all(self.db)
            .await?;

        Ok(with_tickets(rows))
    }

    /// Tickets in progress with one agent, most recently updated first
    pub async fn get_in_progress_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Vec<(entity::ticket_state::Model, entity::ticket::Model)>, DbErr> {
        let rows = entity::prelude::TicketState::find()
            .find_also_related(entity::prelude::Ticket)
            .filter(entity::ticket_state::Column::StatusId.eq(Status::InProgress))
            .filter(entity::ticket_state::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::ticket_state::Column::UpdatedOn)
            .order_by_desc(entity::ticket_state::Column::HeadEntryId)
            .all(self.db)
            .await?;

        Ok(with_tickets(rows))
    }

    pub async fn count_in_progress_by_employee_id(&self, employee_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TicketState::find()
            .filter(entity::ticket_state::Column::StatusId.eq(Status::InProgress))
            .filter(entity::ticket_state::Column::EmployeeId.eq(employee_id))
            .count(self.db)
            .await
    }
}

// Every state row belongs to a ticket, the join only misses rows for a dangling ticket ID.
fn with_tickets(
    rows: Vec<(entity::ticket_state::Model, Option<entity::ticket::Model>)>,
) -> Vec<(entity::ticket_state::Model, entity::ticket::Model)> {
    rows.into_iter()
        .filter_map(|(state, ticket)| ticket.map(|ticket| (state, ticket)))
        .collect()
}
