use entity::sea_orm_active_enums::{EmployeeRole, HistoryEventKind, Status};

use crate::{
    model::{
        employee::EmployeeRoleDto,
        ticket::{HistoryEventDto, TicketStatusDto},
    },
    server::{error::Error, model::db::TicketHistoryModel},
};

/// Highest support tier. Tickets owned at this tier cannot be escalated.
pub const MAX_TIER: i32 = 3;

/// A ticket transition, as written to and read from `ticket_history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// Customer opened the ticket, it waits in the tier 1 queue.
    Created,
    /// Supervisor handed the ticket to an agent of `tier`.
    Assigned { agent_id: i32, tier: i32 },
    /// Owning agent closed the ticket.
    Resolved { agent_id: i32, tier: i32 },
    /// Owning agent sent the ticket to the next tier's queue.
    Escalated { from_tier: i32, to_tier: i32 },
}

/// Ticket state after applying an event, stored in `ticket_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketProjection {
    pub status: Status,
    pub employee_id: Option<i32>,
    pub owner_tier: Option<i32>,
    pub queue_tier: Option<i32>,
}

impl HistoryEvent {
    pub fn kind(&self) -> HistoryEventKind {
        match self {
            Self::Created => HistoryEventKind::Created,
            Self::Assigned { .. } => HistoryEventKind::Assigned,
            Self::Resolved { .. } => HistoryEventKind::Resolved,
            Self::Escalated { .. } => HistoryEventKind::Escalated,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Created | Self::Escalated { .. } => Status::Waiting,
            Self::Assigned { .. } => Status::InProgress,
            Self::Resolved { .. } => Status::Resolved,
        }
    }

    pub fn employee_id(&self) -> Option<i32> {
        match self {
            Self::Assigned { agent_id, .. } | Self::Resolved { agent_id, .. } => Some(*agent_id),
            Self::Created | Self::Escalated { .. } => None,
        }
    }

    pub fn target_tier(&self) -> Option<i32> {
        match self {
            Self::Escalated { to_tier, .. } => Some(*to_tier),
            _ => None,
        }
    }

    pub fn projection(&self) -> TicketProjection {
        let (owner_tier, queue_tier) = match self {
            Self::Created => (None, Some(1)),
            Self::Assigned { tier, .. } | Self::Resolved { tier, .. } => (Some(*tier), None),
            Self::Escalated { to_tier, .. } => (None, Some(*to_tier)),
        };

        TicketProjection {
            status: self.status(),
            employee_id: self.employee_id(),
            owner_tier,
            queue_tier,
        }
    }

    /// Rebuilds the event of a stored history entry.
    ///
    /// # Arguments
    /// - `entry`: The history row
    /// - `employee_tier`: Tier of `entry.employee_id`, required for assignments and resolutions
    ///
    /// # Returns
    /// - `Ok(HistoryEvent)`: The entry is consistent with its event kind
    /// - `Err(Error::InternalError)`: The row is missing the employee or target tier its kind requires
    pub fn from_entry(
        entry: &TicketHistoryModel,
        employee_tier: Option<i32>,
    ) -> Result<Self, Error> {
        let corrupt = |what: &str| {
            Error::InternalError(format!(
                "History entry {} of ticket {} is {:?} but has no {}",
                entry.id, entry.ticket_id, entry.event, what
            ))
        };

        match entry.event {
            HistoryEventKind::Created => Ok(Self::Created),
            HistoryEventKind::Assigned | HistoryEventKind::Resolved => {
                let agent_id = entry.employee_id.ok_or_else(|| corrupt("employee"))?;
                let tier = employee_tier.ok_or_else(|| corrupt("employee tier"))?;

                if entry.event == HistoryEventKind::Assigned {
                    Ok(Self::Assigned { agent_id, tier })
                } else {
                    Ok(Self::Resolved { agent_id, tier })
                }
            }
            HistoryEventKind::Escalated => {
                let to_tier = entry.target_tier.ok_or_else(|| corrupt("target tier"))?;

                Ok(Self::Escalated {
                    from_tier: to_tier - 1,
                    to_tier,
                })
            }
        }
    }
}

impl From<Status> for TicketStatusDto {
    fn from(status: Status) -> Self {
        match status {
            Status::Waiting => Self::Waiting,
            Status::InProgress => Self::InProgress,
            Status::Resolved => Self::Resolved,
        }
    }
}

impl From<HistoryEventKind> for HistoryEventDto {
    fn from(kind: HistoryEventKind) -> Self {
        match kind {
            HistoryEventKind::Created => Self::Created,
            HistoryEventKind::Assigned => Self::Assigned,
            HistoryEventKind::Resolved => Self::Resolved,
            HistoryEventKind::Escalated => Self::Escalated,
        }
    }
}

impl From<EmployeeRole> for EmployeeRoleDto {
    fn from(role: EmployeeRole) -> Self {
        match role {
            EmployeeRole::Agent => Self::Agent,
            EmployeeRole::Supervisor => Self::Supervisor,
        }
    }
}

impl From<EmployeeRoleDto> for EmployeeRole {
    fn from(role: EmployeeRoleDto) -> Self {
        match role {
            EmployeeRoleDto::Agent => Self::Agent,
            EmployeeRoleDto::Supervisor => Self::Supervisor,
        }
    }
}
