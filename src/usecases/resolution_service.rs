//! Resolve a parsed command against the directory: lookup, create, or guarded update.
//!
//! - Help never touches the directory
//! - Empty alias falls back to the caller's default only when one is permitted
//! - Existing entries are overwritten only with `force_update`
//! - Same code (ignoring case) is a no-op, not a write
//! - A create that loses a race to a concurrent create is reported as a conflict

use crate::domain::{DomainError, Intent, Operation, Outcome, ValidationError};
use crate::ports::{CommandPort, Directory};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolution service. Owns no state beyond the directory handle.
pub struct ResolutionService {
    directory: Arc<dyn Directory>,
}

impl ResolutionService {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    async fn lookup(&self, group: &str, alias: String) -> Result<Outcome, DomainError> {
        Ok(match self.directory.get(group, &alias).await? {
            Some(entry) => Outcome::Found {
                alias,
                code: entry.code,
            },
            None => Outcome::NotFound { alias },
        })
    }

    async fn apply_set(
        &self,
        group: &str,
        alias: String,
        code: String,
        force_update: bool,
    ) -> Result<Outcome, DomainError> {
        if code.is_empty() {
            return Ok(Outcome::Invalid(ValidationError::CodeRequired));
        }

        let Some(existing) = self.directory.get(group, &alias).await? else {
            return self.create(group, alias, code).await;
        };

        if existing.has_code(&code) {
            debug!(group, alias = %alias, "code already configured, skipping write");
            return Ok(Outcome::Unchanged {
                alias,
                code: existing.code,
            });
        }

        if !force_update {
            return Ok(Outcome::ConflictNeedsForce { alias });
        }

        match self.directory.update(group, &alias, &code).await {
            Ok(()) => {
                info!(
                    group,
                    alias = %alias,
                    code = %code,
                    previous = %existing.code,
                    "meeting code updated"
                );
                Ok(Outcome::Updated {
                    alias,
                    code,
                    previous_code: existing.code,
                })
            }
            Err(DomainError::NotFound { .. }) => {
                warn!(group, alias = %alias, "entry vanished before update, creating instead");
                self.create(group, alias, code).await
            }
            Err(e) => Err(e),
        }
    }

    /// Create a new entry. If a concurrent create won, re-read once to tell an
    /// identical write (`Unchanged`) from a real clash (`ConflictNeedsForce`).
    async fn create(
        &self,
        group: &str,
        alias: String,
        code: String,
    ) -> Result<Outcome, DomainError> {
        match self.directory.create(group, &alias, &code).await {
            Ok(()) => {
                info!(group, alias = %alias, code = %code, "meeting code added");
                Ok(Outcome::Created { alias, code })
            }
            Err(DomainError::AlreadyExists { .. }) => {
                warn!(group, alias = %alias, "lost create race to a concurrent request");
                match self.directory.get(group, &alias).await? {
                    Some(winner) if winner.has_code(&code) => Ok(Outcome::Unchanged {
                        alias,
                        code: winner.code,
                    }),
                    _ => Ok(Outcome::ConflictNeedsForce { alias }),
                }
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl CommandPort for ResolutionService {
    async fn resolve(
        &self,
        intent: Intent,
        group: &str,
        default_alias: Option<&str>,
    ) -> Result<Outcome, DomainError> {
        if intent.operation == Operation::Help {
            return Ok(Outcome::Help);
        }
        if group.trim().is_empty() {
            return Ok(Outcome::Invalid(ValidationError::GroupRequired));
        }

        let alias = if intent.alias.is_empty() {
            default_alias.unwrap_or_default().trim().to_string()
        } else {
            intent.alias
        };
        if alias.is_empty() {
            return Ok(Outcome::Invalid(ValidationError::AliasRequired));
        }

        match intent.operation {
            Operation::Get => self.lookup(group, alias).await,
            Operation::Set => {
                self.apply_set(group, alias, intent.code, intent.force_update)
                    .await
            }
            Operation::Help => Ok(Outcome::Help),
        }
    }
}
