//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/storage types here; adapters map into these.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// One alias-to-code mapping. `(group, alias)` identifies at most one entry.
///
/// Serialized with the persisted field names (`id`, `partitionKey`, `code`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingEntry {
    #[serde(rename = "id")]
    pub alias: String,
    #[serde(rename = "partitionKey")]
    pub group: String,
    pub code: String,
}

impl MeetingEntry {
    pub fn new(
        group: impl Into<String>,
        alias: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            group: group.into(),
            code: code.into(),
        }
    }

    /// True if the stored code equals `code`, ignoring letter case.
    pub fn has_code(&self, code: &str) -> bool {
        codes_match(&self.code, code)
    }
}

pub(crate) fn codes_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
    Help,
}

/// Parsed command. `alias` may be empty (caller supplies a default);
/// `code` is only meaningful for [`Operation::Set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub operation: Operation,
    pub alias: String,
    pub code: String,
    pub force_update: bool,
}

impl Intent {
    pub fn get(alias: impl Into<String>) -> Self {
        Self {
            operation: Operation::Get,
            alias: alias.into(),
            code: String::new(),
            force_update: false,
        }
    }

    pub fn set(alias: impl Into<String>, code: impl Into<String>, force_update: bool) -> Self {
        Self {
            operation: Operation::Set,
            alias: alias.into(),
            code: code.into(),
            force_update,
        }
    }

    pub fn help() -> Self {
        Self {
            operation: Operation::Help,
            alias: String::new(),
            code: String::new(),
            force_update: false,
        }
    }
}

/// Result of resolving an [`Intent`] against the directory. Consumed by renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found {
        alias: String,
        code: String,
    },
    NotFound {
        alias: String,
    },
    Created {
        alias: String,
        code: String,
    },
    Updated {
        alias: String,
        code: String,
        previous_code: String,
    },
    /// The directory already holds this code (case-insensitive); nothing was written.
    Unchanged {
        alias: String,
        code: String,
    },
    /// An entry with a different code exists and the caller did not ask to overwrite it.
    ConflictNeedsForce {
        alias: String,
    },
    Invalid(ValidationError),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Found,
    NotFound,
    Created,
    Updated,
    Unchanged,
    ConflictNeedsForce,
    ValidationError,
    Help,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Found { .. } => OutcomeKind::Found,
            Outcome::NotFound { .. } => OutcomeKind::NotFound,
            Outcome::Created { .. } => OutcomeKind::Created,
            Outcome::Updated { .. } => OutcomeKind::Updated,
            Outcome::Unchanged { .. } => OutcomeKind::Unchanged,
            Outcome::ConflictNeedsForce { .. } => OutcomeKind::ConflictNeedsForce,
            Outcome::Invalid(_) => OutcomeKind::ValidationError,
            Outcome::Help => OutcomeKind::Help,
        }
    }

    /// Resolved alias, if the outcome carries one.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Outcome::Found { alias, .. }
            | Outcome::NotFound { alias }
            | Outcome::Created { alias, .. }
            | Outcome::Updated { alias, .. }
            | Outcome::Unchanged { alias, .. }
            | Outcome::ConflictNeedsForce { alias } => Some(alias),
            Outcome::Invalid(_) | Outcome::Help => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_code_ignores_case() {
        let entry = MeetingEntry::new("g", "standup", "abc-defg-hij");
        assert!(entry.has_code("ABC-DEFG-HIJ"));
        assert!(!entry.has_code("abc-defg-hik"));
    }

    #[test]
    fn test_entry_serializes_persisted_field_names() {
        let entry = MeetingEntry::new("acme", "standup", "abc");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "standup");
        assert_eq!(json["partitionKey"], "acme");
        assert_eq!(json["code"], "abc");
    }

    #[test]
    fn test_outcome_kind_and_alias() {
        let outcome = Outcome::Updated {
            alias: "a".into(),
            code: "Y".into(),
            previous_code: "X".into(),
        };
        assert_eq!(outcome.kind(), OutcomeKind::Updated);
        assert_eq!(outcome.alias(), Some("a"));
        assert_eq!(
            Outcome::Invalid(ValidationError::CodeRequired).kind(),
            OutcomeKind::ValidationError
        );
        assert_eq!(Outcome::Help.alias(), None);
    }
}
