use sea_orm::entity::prelude::*;

/// Ticket status, backed by the ids seeded into the `ticket_status` lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Status {
    #[sea_orm(num_value = 1)]
    Waiting,
    #[sea_orm(num_value = 2)]
    InProgress,
    #[sea_orm(num_value = 3)]
    Resolved,
}

impl Status {
    /// Name stored in the `ticket_status` lookup table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "En espera",
            Self::InProgress => "En Proceso",
            Self::Resolved => "Resuelto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EmployeeRole {
    #[sea_orm(string_value = "agent")]
    Agent,
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
}

/// Kind of event recorded by a `ticket_history` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum HistoryEventKind {
    #[sea_orm(string_value = "created")]
    Created,
    #[sea_orm(string_value = "assigned")]
    Assigned,
    #[sea_orm(string_value = "resolved")]
    Resolved,
    #[sea_orm(string_value = "escalated")]
    Escalated,
}
