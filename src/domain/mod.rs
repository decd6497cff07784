//! Core domain layer. No external I/O dependencies.
//!
//! Directory entries, parsed commands and resolution outcomes live here.

pub mod entities;
pub mod errors;

pub use entities::{Intent, MeetingEntry, Operation, Outcome, OutcomeKind};
pub use errors::{DomainError, ValidationError};
