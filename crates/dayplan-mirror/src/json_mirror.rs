//! File-backed implementation of the ItemMirror port
//!
//! One pretty-printed JSON document per user, overwritten whole on
//! every save. Writes go to a temporary file in the same directory
//! followed by a rename, so readers never observe a partial document.

use std::path::{Path, PathBuf};

use dayplan_core::domain::ToDoItem;
use dayplan_core::ports::ItemMirror;

use crate::MirrorError;

/// Stores each user's item list as `{user_id}_todo_items.json`
pub struct JsonItemMirror {
    dir: PathBuf,
}

impl JsonItemMirror {
    /// Creates a mirror rooted at `dir`
    ///
    /// The directory is created lazily on first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the mirror document for `user_id`
    pub fn document_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}_todo_items.json", user_id))
    }

    async fn write_document(&self, target: &Path, json: String) -> Result<(), MirrorError> {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a temporary file in the same directory so rename is atomic
        let mut tmp_path = target.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, target).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemMirror for JsonItemMirror {
    async fn save_items(&self, items: &[ToDoItem], user_id: &str) -> anyhow::Result<()> {
        let target = self.document_path(user_id);
        let json = serde_json::to_string_pretty(items).map_err(MirrorError::from)?;

        self.write_document(&target, json).await?;

        tracing::trace!(
            user_id = %user_id,
            count = items.len(),
            path = %target.display(),
            "Mirror document written"
        );
        Ok(())
    }

    async fn load_items(&self, user_id: &str) -> anyhow::Result<Option<Vec<ToDoItem>>> {
        let target = self.document_path(user_id);

        let data = match tokio::fs::read(&target).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(MirrorError::from(e).into()),
        };

        match serde_json::from_slice::<Vec<ToDoItem>>(&data) {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                // A corrupt document is treated the same as an absent one
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    "Mirror document unreadable, treating as absent"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::domain::Priority;

    fn test_item(id: &str, user_id: &str) -> ToDoItem {
        ToDoItem {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: "A task".to_string(),
            start_date: "2025-06-10 09:00".to_string(),
            end_date: "2025-06-10 17:00".to_string(),
            user_id: user_id.to_string(),
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn save_then_load_returns_items() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        let items = vec![test_item("i1", "alice"), test_item("i2", "alice")];
        mirror.save_items(&items, "alice").await.unwrap();

        let loaded = mirror.load_items("alice").await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "i1");
        assert_eq!(loaded[1].priority, Priority::Medium);
    }

    #[tokio::test]
    async fn load_missing_document_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        let loaded = mirror.load_items("nobody").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn load_corrupt_document_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        std::fs::write(mirror.document_path("alice"), "not json {{{").unwrap();

        let loaded = mirror.load_items("alice").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        mirror
            .save_items(&[test_item("i1", "alice"), test_item("i2", "alice")], "alice")
            .await
            .unwrap();
        mirror.save_items(&[test_item("i3", "alice")], "alice").await.unwrap();

        let loaded = mirror.load_items("alice").await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "i3");
    }

    #[tokio::test]
    async fn save_empty_list_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        mirror.save_items(&[], "alice").await.unwrap();

        let raw = std::fs::read_to_string(mirror.document_path("alice")).unwrap();
        assert_eq!(raw.trim(), "[]");
        let loaded = mirror.load_items("alice").await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn documents_are_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        mirror.save_items(&[test_item("i1", "alice")], "alice").await.unwrap();
        mirror.save_items(&[test_item("i2", "bob")], "bob").await.unwrap();

        let alice = mirror.load_items("alice").await.unwrap().unwrap();
        let bob = mirror.load_items("bob").await.unwrap().unwrap();
        assert_eq!(alice[0].id, "i1");
        assert_eq!(bob[0].id, "i2");
    }

    #[tokio::test]
    async fn document_uses_camel_case_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        mirror.save_items(&[test_item("i1", "alice")], "alice").await.unwrap();

        let raw = std::fs::read_to_string(mirror.document_path("alice")).unwrap();
        assert!(raw.contains("\"startDate\""));
        assert!(raw.contains("\"endDate\""));
        assert!(raw.contains("\"userId\""));
        assert!(raw.contains("\"medium\""));
    }

    #[tokio::test]
    async fn no_temporary_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonItemMirror::new(dir.path());

        mirror.save_items(&[test_item("i1", "alice")], "alice").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["alice_todo_items.json"]);
    }
}
