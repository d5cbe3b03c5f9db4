//! Database model type aliases.
//!
//! Short names for the `entity` crate models used across repositories and services.

/// Customer account: nickname, contact details and the tickets it opened.
pub type CustomerModel = entity::customer::Model;

/// Employee account. `role` decides agent or supervisor, `tier` (1..=3) the support level.
pub type EmployeeModel = entity::employee::Model;

pub type AdministratorModel = entity::administrator::Model;

/// Ticket as submitted by a customer. Status lives in the history and the state projection.
pub type TicketModel = entity::ticket::Model;

/// One row of the append-only ticket history.
///
/// # Fields (from `entity::ticket_history::Model`)
/// - `event` - Kind of transition (`created`, `assigned`, `resolved`, `escalated`)
/// - `status_id` - Status the ticket is in after this entry
/// - `employee_id` - Agent owning the ticket after this entry, `None` while waiting
/// - `target_tier` - Tier the ticket was escalated to, only set on escalations
/// - `modified_on` - Date of the transition; with `id` it orders the history
pub type TicketHistoryModel = entity::ticket_history::Model;

/// Current state of a ticket, kept equal to its newest history entry.
///
/// `head_entry_id` is compared on every write so concurrent actions cannot both advance the
/// same ticket.
pub type TicketStateModel = entity::ticket_state::Model;
