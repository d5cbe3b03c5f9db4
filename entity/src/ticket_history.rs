use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{HistoryEventKind, Status};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ticket_id: i32,
    pub event: HistoryEventKind,
    pub status_id: Status,
    pub employee_id: Option<i32>,
    pub target_tier: Option<i32>,
    pub description: String,
    pub modified_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Ticket,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::ticket_status::Entity",
        from = "Column::StatusId",
        to = "super::ticket_status::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TicketStatus,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::ticket_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
