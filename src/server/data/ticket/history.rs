use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{HistoryEventKind, Status};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::ticket::HistoryEvent;

pub struct TicketHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry for `event` to a ticket's history
    pub async fn append(
        &self,
        ticket_id: i32,
        event: &HistoryEvent,
        description: &str,
        modified_on: NaiveDate,
    ) -> Result<entity::ticket_history::Model, DbErr> {
        let entry = entity::ticket_history::ActiveModel {
            ticket_id: ActiveValue::Set(ticket_id),
            event: ActiveValue::Set(event.kind()),
            status_id: ActiveValue::Set(event.status()),
            employee_id: ActiveValue::Set(event.employee_id()),
            target_tier: ActiveValue::Set(event.target_tier()),
            description: ActiveValue::Set(description.to_string()),
            modified_on: ActiveValue::Set(modified_on),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// The authoritative entry of a ticket: greatest `modified_on`, then greatest ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The ticket's current entry
    /// - `Ok(None)`: The ticket has no history
    pub async fn get_latest_by_ticket_id(
        &self,
        ticket_id: i32,
    ) -> Result<Option<entity::ticket_history::Model>, DbErr> {
        entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::TicketId.eq(ticket_id))
            .order_by_desc(entity::ticket_history::Column::ModifiedOn)
            .order_by_desc(entity::ticket_history::Column::Id)
            .one(self.db)
            .await
    }

    /// Full history of a ticket, oldest first
    pub async fn get_many_by_ticket_id(
        &self,
        ticket_id: i32,
    ) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::ticket_history::Column::ModifiedOn)
            .order_by_asc(entity::ticket_history::Column::Id)
            .all(self.db)
            .await
    }

    /// Authoritative entry of each provided ticket, keyed by ticket ID
    ///
    /// Tickets without history are absent from the map.
    pub async fn get_latest_by_ticket_ids(
        &self,
        ticket_ids: &[i32],
    ) -> Result<HashMap<i32, entity::ticket_history::Model>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entries = entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::TicketId.is_in(ticket_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(latest_per_ticket(entries))
    }

    /// Creation entries of tickets nobody has touched yet, oldest first
    pub async fn get_new_tickets(&self) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        let created = entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::Event.eq(HistoryEventKind::Created))
            .all(self.db)
            .await?;

        self.keep_authoritative(created).await
    }

    /// Escalations to `tier` that are still their ticket's authoritative entry, oldest first
    ///
    /// Tickets whose latest entry by an agent of `tier` is an open assignment are excluded.
    pub async fn get_live_escalations_to_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        let escalations = entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::Event.eq(HistoryEventKind::Escalated))
            .filter(entity::ticket_history::Column::TargetTier.eq(tier))
            .all(self.db)
            .await?;

        let assigned_at_tier: HashSet<i32> = self
            .get_latest_assignments_by_tier(tier)
            .await?
            .into_iter()
            .filter(|(entry, _)| entry.status_id == Status::InProgress)
            .map(|(entry, _)| entry.ticket_id)
            .collect();

        let live = self.keep_authoritative(escalations).await?;

        Ok(live
            .into_iter()
            .filter(|entry| !assigned_at_tier.contains(&entry.ticket_id))
            .collect())
    }

    /// Entries that leave a ticket waiting in the queue of `tier`, oldest first
    ///
    /// Tier 1 also receives every new ticket.
    pub async fn get_waiting_in_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        let mut waiting = self.get_live_escalations_to_tier(tier).await?;

        if tier == 1 {
            waiting.extend(self.get_new_tickets().await?);
            waiting.sort_by_key(|entry| (entry.modified_on, entry.id));
        }

        Ok(waiting)
    }

    /// Per ticket, the latest entry among the entries of employees currently at `tier`
    ///
    /// The join uses the employee's current tier. Employees cannot change tier or role
    /// while they own tickets in progress, so for every in-progress ticket this is also
    /// the tier the ticket was assigned in.
    pub async fn get_latest_assignments_by_tier(
        &self,
        tier: i32,
    ) -> Result<Vec<(entity::ticket_history::Model, entity::employee::Model)>, DbErr> {
        let rows = entity::prelude::TicketHistory::find()
            .find_also_related(entity::prelude::Employee)
            .filter(entity::employee::Column::Tier.eq(tier))
            .all(self.db)
            .await?;

        let mut latest: HashMap<i32, (entity::ticket_history::Model, entity::employee::Model)> =
            HashMap::new();
        for (entry, employee) in rows {
            let Some(employee) = employee else {
                continue;
            };

            match latest.get(&entry.ticket_id) {
                Some((current, _)) if !is_newer(&entry, current) => {}
                _ => {
                    latest.insert(entry.ticket_id, (entry, employee));
                }
            }
        }

        let mut latest: Vec<_> = latest.into_values().collect();
        latest.sort_by_key(|(entry, _)| (entry.modified_on, entry.id));

        Ok(latest)
    }

    /// Entries written for an employee, newest first
    pub async fn get_many_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::ticket_history::Column::ModifiedOn)
            .order_by_desc(entity::ticket_history::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of entries referencing an employee
    pub async fn count_by_employee_id(&self, employee_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TicketHistory::find()
            .filter(entity::ticket_history::Column::EmployeeId.eq(employee_id))
            .count(self.db)
            .await
    }

    /// Distinct tickets with at least one `event` entry for an employee
    pub async fn count_tickets_by_employee_and_event(
        &self,
        employee_id: i32,
        event: HistoryEventKind,
    ) -> Result<u64, DbErr> {
        let ticket_ids: Vec<i32> = entity::prelude::TicketHistory::find()
            .select_only()
            .column(entity::ticket_history::Column::TicketId)
            .distinct()
            .filter(entity::ticket_history::Column::EmployeeId.eq(employee_id))
            .filter(entity::ticket_history::Column::Event.eq(event))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ticket_ids.len() as u64)
    }

    /// Keeps the entries that are still their ticket's authoritative entry, oldest first
    async fn keep_authoritative(
        &self,
        entries: Vec<entity::ticket_history::Model>,
    ) -> Result<Vec<entity::ticket_history::Model>, DbErr> {
        let ticket_ids: Vec<i32> = entries
            .iter()
            .map(|entry| entry.ticket_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let latest = self.get_latest_by_ticket_ids(&ticket_ids).await?;

        let mut authoritative: Vec<_> = entries
            .into_iter()
            .filter(|entry| {
                latest
                    .get(&entry.ticket_id)
                    .is_some_and(|head| head.id == entry.id)
            })
            .collect();
        authoritative.sort_by_key(|entry| (entry.modified_on, entry.id));

        Ok(authoritative)
    }
}

/// Whether `entry` orders after `other` in a ticket's history
fn is_newer(entry: &entity::ticket_history::Model, other: &entity::ticket_history::Model) -> bool {
    (entry.modified_on, entry.id) > (other.modified_on, other.id)
}

fn latest_per_ticket(
    entries: Vec<entity::ticket_history::Model>,
) -> HashMap<i32, entity::ticket_history::Model> {
    let mut latest: HashMap<i32, entity::ticket_history::Model> = HashMap::new();

    for entry in entries {
        match latest.get(&entry.ticket_id) {
            Some(current) if !is_newer(&entry, current) => {}
            _ => {
                latest.insert(entry.ticket_id, entry);
            }
        }
    }

    latest
}
