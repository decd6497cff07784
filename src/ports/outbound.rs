//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, MeetingEntry};

/// Alias directory keyed by `(group, alias)`.
///
/// Each call must be atomic on its own; no locking across calls is assumed.
/// The resolution service reads then writes, so `create` must still enforce the
/// uniqueness of `(group, alias)` itself.
#[async_trait::async_trait]
pub trait Directory: Send + Sync {
    /// Look up an entry. `Ok(None)` when absent.
    async fn get(&self, group: &str, alias: &str) -> Result<Option<MeetingEntry>, DomainError>;

    /// Insert a new entry.
    ///
    /// # Errors
    /// `DomainError::AlreadyExists` if `(group, alias)` is already taken.
    async fn create(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError>;

    /// Replace the code of an existing entry.
    ///
    /// # Errors
    /// `DomainError::NotFound` if there is no entry for `(group, alias)`.
    async fn update(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError>;
}
