//! Schedule conflict detection across time slots and venues.
//!
//! Validation is advisory: it surfaces conflicts for the organizer to
//! resolve and never blocks match creation or slot assignment.

pub mod models;

mod validator;

pub use models::{Conflict, ScheduleReport};
pub use validator::validate;
