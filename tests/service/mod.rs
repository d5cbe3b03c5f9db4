//! Tests for the service layer: ticket actions, employee changes, dashboards and the full ticket lifecycle.

mod employee;

use chibcha::server::{
    error::{domain::DomainError, Error},
    service::ticket::{dashboard::DashboardService, TicketService},
};
use chibcha_test_utils::prelude::*;

use crate::util::*;
