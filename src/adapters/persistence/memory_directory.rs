//! Implements Directory in process memory.
//!
//! Used for `MEET_STORE=memory` and in tests. Contents are lost on restart.

use crate::domain::{DomainError, MeetingEntry};
use crate::ports::Directory;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

/// (group, alias) -> code
#[derive(Default)]
pub struct MemoryDirectory {
    entries: RwLock<HashMap<(String, String), String>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(group: &str, alias: &str) -> (String, String) {
        (group.to_string(), alias.to_string())
    }
}

#[async_trait::async_trait]
impl Directory for MemoryDirectory {
    async fn get(&self, group: &str, alias: &str) -> Result<Option<MeetingEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&Self::key(group, alias))
            .map(|code| MeetingEntry::new(group, alias, code.as_str())))
    }

    async fn create(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        match entries.entry(Self::key(group, alias)) {
            Entry::Occupied(_) => Err(DomainError::AlreadyExists {
                group: group.to_string(),
                alias: alias.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(code.to_string());
                Ok(())
            }
        }
    }

    async fn update(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&Self::key(group, alias)) {
            Some(stored) => {
                *stored = code.to_string();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                group: group.to_string(),
                alias: alias.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_update() {
        let dir = MemoryDirectory::new();
        assert!(dir.get("g", "a").await.unwrap().is_none());

        dir.create("g", "a", "X").await.unwrap();
        assert_eq!(
            dir.get("g", "a").await.unwrap(),
            Some(MeetingEntry::new("g", "a", "X"))
        );

        dir.update("g", "a", "Y").await.unwrap();
        assert_eq!(dir.get("g", "a").await.unwrap().unwrap().code, "Y");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_key() {
        let dir = MemoryDirectory::new();
        dir.create("g", "a", "X").await.unwrap();

        let err = dir.create("g", "a", "Y").await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists { .. }));
        assert_eq!(dir.get("g", "a").await.unwrap().unwrap().code, "X");

        // same alias in another group is a different key
        dir.create("h", "a", "Z").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let dir = MemoryDirectory::new();
        let err = dir.update("g", "a", "X").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
