use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EmployeeRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub tier: i32,
    pub active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket_history::Entity")]
    TicketHistory,
    #[sea_orm(has_many = "super::ticket_state::Entity")]
    TicketState,
}

impl Related<super::ticket_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketHistory.def()
    }
}

impl Related<super::ticket_state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketState.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
