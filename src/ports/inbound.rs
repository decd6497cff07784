//! Inbound port. HTTP adapters call into the application.

use crate::domain::{DomainError, Intent, Outcome};

/// Resolves a parsed command against the directory.
#[async_trait::async_trait]
pub trait CommandPort: Send + Sync {
    /// `default_alias` is used when `intent.alias` is empty; `None` forbids defaulting.
    ///
    /// Validation problems, conflicts and misses come back as `Outcome`s.
    /// Only storage failures are returned as `Err`.
    async fn resolve(
        &self,
        intent: Intent,
        group: &str,
        default_alias: Option<&str>,
    ) -> Result<Outcome, DomainError>;
}
