use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{HistoryEventKind, Status};
use sea_orm::{ActiveEnum, ActiveValue, EntityTrait, Iterable};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn ticket<'a>(&'a mut self) -> TicketFixtures<'a> {
        TicketFixtures { setup: self }
    }
}

pub struct TicketFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TicketFixtures<'a> {
    /// Insert the fixed status vocabulary into `ticket_status`
    pub async fn seed_statuses(&self) -> Result<(), TestError> {
        let statuses = Status::iter().map(|status| entity::ticket_status::ActiveModel {
            id: ActiveValue::Set(status.to_value()),
            name: ActiveValue::Set(status.label().to_string()),
        });

        entity::prelude::TicketStatus::insert_many(statuses)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }

    /// Insert a bare ticket row without any history or state
    pub async fn insert_ticket(
        &self,
        customer_id: i32,
        title: &str,
    ) -> Result<entity::ticket::Model, TestError> {
        Ok(
            entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(format!("Description for {}", title)),
                created_on: ActiveValue::Set(Utc::now().date_naive()),
                customer_id: ActiveValue::Set(customer_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a raw history row with an explicit modification date
    pub async fn insert_history_entry(
        &self,
        ticket_id: i32,
        entry: HistoryEntryFixture,
    ) -> Result<entity::ticket_history::Model, TestError> {
        Ok(
            entity::prelude::TicketHistory::insert(entity::ticket_history::ActiveModel {
                ticket_id: ActiveValue::Set(ticket_id),
                event: ActiveValue::Set(entry.event),
                status_id: ActiveValue::Set(entry.status),
                employee_id: ActiveValue::Set(entry.employee_id),
                target_tier: ActiveValue::Set(entry.target_tier),
                description: ActiveValue::Set(entry.description),
                modified_on: ActiveValue::Set(entry.modified_on),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

/// Values for a raw `ticket_history` row
pub struct HistoryEntryFixture {
    pub event: HistoryEventKind,
    pub status: Status,
    pub employee_id: Option<i32>,
    pub target_tier: Option<i32>,
    pub description: String,
    pub modified_on: NaiveDate,
}

impl HistoryEntryFixture {
    pub fn created(modified_on: NaiveDate) -> Self {
        Self {
            event: HistoryEventKind::Created,
            status: Status::Waiting,
            employee_id: None,
            target_tier: None,
            description: "Ticket creado".to_string(),
            modified_on,
        }
    }

    pub fn assigned(employee_id: i32, modified_on: NaiveDate) -> Self {
        Self {
            event: HistoryEventKind::Assigned,
            status: Status::InProgress,
            employee_id: Some(employee_id),
            target_tier: None,
            description: format!("Asignado al agente {}", employee_id),
            modified_on,
        }
    }

    pub fn escalated(from_tier: i32, modified_on: NaiveDate) -> Self {
        Self {
            event: HistoryEventKind::Escalated,
            status: Status::Waiting,
            employee_id: None,
            target_tier: Some(from_tier + 1),
            description: format!("Escalado del nivel {} al nivel {}", from_tier, from_tier + 1),
            modified_on,
        }
    }

    pub fn resolved(employee_id: i32, modified_on: NaiveDate) -> Self {
        Self {
            event: HistoryEventKind::Resolved,
            status: Status::Resolved,
            employee_id: Some(employee_id),
            target_tier: None,
            description: format!("Resuelto por el agente {}", employee_id),
            modified_on,
        }
    }
}
