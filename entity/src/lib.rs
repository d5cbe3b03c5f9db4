//! sea-orm entities for the Chibcha support desk schema.

pub mod prelude;

pub mod administrator;
pub mod customer;
pub mod employee;
pub mod sea_orm_active_enums;
pub mod ticket;
pub mod ticket_history;
pub mod ticket_state;
pub mod ticket_status;
