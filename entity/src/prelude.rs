pub use super::administrator::Entity as Administrator;
pub use super::customer::Entity as Customer;
pub use super::employee::Entity as Employee;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_history::Entity as TicketHistory;
pub use super::ticket_state::Entity as TicketState;
pub use super::ticket_status::Entity as TicketStatus;
