//! Item use case - the dual-write consistency core
//!
//! Every mutation writes the relational store first and then brings the
//! per-user document mirror back in line with it. Reads come exclusively
//! from the relational store; the mirror is never consulted by the
//! running application.
//!
//! Two mirror-sync rules are load-bearing:
//!
//! - **delete**: after the relational delete, the mirror is overwritten
//!   with the rows that remain in the store, so a deleted id can never
//!   survive in the document.
//! - **update**: when the updated id is absent from the mirror list
//!   (document missing or stale), the mirror is rebuilt wholesale from
//!   the relational store instead of being left to diverge.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ToDoItem;
use crate::ports::{ItemMirror, ItemRepository};

/// Use case for to-do item operations
///
/// Coordinates the relational store and the document mirror so both
/// reflect the same per-user item list after every mutation.
pub struct ItemUseCase {
    items: Arc<dyn ItemRepository>,
    mirror: Arc<dyn ItemMirror>,
}

impl ItemUseCase {
    /// Creates a new ItemUseCase with the required dependencies
    pub fn new(items: Arc<dyn ItemRepository>, mirror: Arc<dyn ItemMirror>) -> Self {
        Self { items, mirror }
    }

    /// Creates an item: relational insert, then mirror append
    ///
    /// The mirror list is loaded (empty when absent or corrupt), the new
    /// item appended, and the document overwritten with the full list.
    pub async fn save_item(&self, item: &ToDoItem) {
        if let Err(e) = self.items.save_item(item).await {
            warn!(item_id = %item.id, error = %e, "Failed to save item to relational store");
        }

        let mut list = self.load_mirror_or_empty(&item.user_id).await;
        list.push(item.clone());
        self.write_mirror(&list, &item.user_id).await;
    }

    /// Fetches the user's items from the relational store only
    ///
    /// Returns an empty list when the store fails (logged).
    pub async fn fetch_items(&self, user_id: &str) -> Vec<ToDoItem> {
        match self.items.fetch_items(user_id).await {
            Ok(items) => items,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to fetch items, returning empty list");
                Vec::new()
            }
        }
    }

    /// Updates an item: relational full-row replace, then mirror patch
    ///
    /// When the id is present in the mirror list the entry is replaced in
    /// place; when it is absent the mirror is rebuilt wholesale from the
    /// relational store (initialize-on-demand).
    pub async fn update_item(&self, item: &ToDoItem) {
        if let Err(e) = self.items.update_item(item).await {
            warn!(item_id = %item.id, error = %e, "Failed to update item in relational store");
        }

        let mut list = self.load_mirror_or_empty(&item.user_id).await;
        match list.iter_mut().find(|i| i.id == item.id) {
            Some(entry) => {
                *entry = item.clone();
                self.write_mirror(&list, &item.user_id).await;
            }
            None => {
                let rebuilt = self.fetch_items(&item.user_id).await;
                self.write_mirror(&rebuilt, &item.user_id).await;
            }
        }
    }

    /// Deletes an item: relational delete, then mirror rewrite
    ///
    /// The mirror is overwritten with whatever rows remain in the
    /// relational store for the item's user, so the deleted id can never
    /// survive in the document.
    pub async fn delete_item(&self, item: &ToDoItem) {
        if let Err(e) = self.items.delete_item(&item.id).await {
            warn!(item_id = %item.id, error = %e, "Failed to delete item from relational store");
        }

        let remaining = self.fetch_items(&item.user_id).await;
        self.write_mirror(&remaining, &item.user_id).await;
    }

    /// Wipes every item row for every user from the relational store
    ///
    /// Mirror documents are left untouched; there is no registry of users
    /// to enumerate them from.
    pub async fn delete_all_items(&self) {
        if let Err(e) = self.items.delete_all_items().await {
            warn!(error = %e, "Failed to delete all items");
        }
    }

    async fn load_mirror_or_empty(&self, user_id: &str) -> Vec<ToDoItem> {
        match self.mirror.load_items(user_id).await {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to load mirror document, treating as empty");
                Vec::new()
            }
        }
    }

    async fn write_mirror(&self, items: &[ToDoItem], user_id: &str) {
        if let Err(e) = self.mirror.save_items(items, user_id).await {
            warn!(user_id = %user_id, error = %e, "Failed to write mirror document");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_item, InMemoryItemRepository, InMemoryMirror};

    fn setup() -> (Arc<InMemoryItemRepository>, Arc<InMemoryMirror>, ItemUseCase) {
        let repo = Arc::new(InMemoryItemRepository::new());
        let mirror = Arc::new(InMemoryMirror::new());
        let use_case = ItemUseCase::new(repo.clone(), mirror.clone());
        (repo, mirror, use_case)
    }

    mod save_tests {
        use super::*;

        #[tokio::test]
        async fn test_save_writes_store_and_mirror() {
            let (repo, mirror, use_case) = setup();
            let item = test_item("a", "u1");

            use_case.save_item(&item).await;

            assert_eq!(repo.all_items(), vec![item.clone()]);
            assert_eq!(mirror.document("u1"), Some(vec![item]));
        }

        #[tokio::test]
        async fn test_save_appends_to_existing_mirror_list() {
            let (_repo, mirror, use_case) = setup();
            let first = test_item("a", "u1");
            let second = test_item("b", "u1");

            use_case.save_item(&first).await;
            use_case.save_item(&second).await;

            assert_eq!(mirror.document("u1"), Some(vec![first, second]));
        }

        #[tokio::test]
        async fn test_save_still_mirrors_when_store_fails() {
            let (repo, mirror, use_case) = setup();
            let item = test_item("a", "u1");

            repo.set_failing(true);
            use_case.save_item(&item).await;

            assert_eq!(mirror.document("u1"), Some(vec![item]));
        }

        #[tokio::test]
        async fn test_save_treats_corrupt_mirror_as_empty() {
            let (_repo, mirror, use_case) = setup();
            let item = test_item("a", "u1");

            mirror.set_failing(true);
            use_case.save_item(&item).await;
            mirror.set_failing(false);

            // Nothing was written while failing; a subsequent save starts
            // from an empty list rather than erroring out.
            let second = test_item("b", "u1");
            use_case.save_item(&second).await;
            assert_eq!(mirror.document("u1"), Some(vec![second]));
        }
    }

    mod fetch_tests {
        use super::*;

        #[tokio::test]
        async fn test_fetch_scopes_by_user() {
            let (_repo, _mirror, use_case) = setup();
            for id in ["a", "b", "c"] {
                use_case.save_item(&test_item(id, "u1")).await;
            }
            for id in ["d", "e"] {
                use_case.save_item(&test_item(id, "u2")).await;
            }

            let items = use_case.fetch_items("u1").await;
            assert_eq!(items.len(), 3);
            assert!(items.iter().all(|i| i.user_id == "u1"));
        }

        #[tokio::test]
        async fn test_fetch_never_reads_the_mirror() {
            let (_repo, mirror, use_case) = setup();
            mirror.seed("u1", vec![test_item("ghost", "u1")]);

            assert!(use_case.fetch_items("u1").await.is_empty());
        }

        #[tokio::test]
        async fn test_fetch_returns_empty_on_store_failure() {
            let (repo, _mirror, use_case) = setup();
            use_case.save_item(&test_item("a", "u1")).await;

            repo.set_failing(true);
            assert!(use_case.fetch_items("u1").await.is_empty());
        }
    }

    mod update_tests {
        use super::*;

        #[tokio::test]
        async fn test_update_replaces_store_row_and_mirror_entry() {
            let (repo, mirror, use_case) = setup();
            let item = test_item("a", "u1");
            use_case.save_item(&item).await;

            let mut updated = item.clone();
            updated.title = "renamed".to_string();
            updated.priority = crate::domain::Priority::High;
            use_case.update_item(&updated).await;

            assert_eq!(repo.all_items(), vec![updated.clone()]);
            assert_eq!(mirror.document("u1"), Some(vec![updated]));
        }

        #[tokio::test]
        async fn test_update_keeps_id_and_other_entries() {
            let (_repo, mirror, use_case) = setup();
            let a = test_item("a", "u1");
            let b = test_item("b", "u1");
            use_case.save_item(&a).await;
            use_case.save_item(&b).await;

            let mut updated = a.clone();
            updated.description = "new description".to_string();
            use_case.update_item(&updated).await;

            assert_eq!(mirror.document("u1"), Some(vec![updated.clone(), b]));
            assert_eq!(updated.id, a.id);
        }

        #[tokio::test]
        async fn test_update_rebuilds_mirror_when_id_absent() {
            let (repo, mirror, use_case) = setup();
            // Store has the row but the mirror was never initialized.
            let item = test_item("a", "u1");
            repo.save_item(&item).await.unwrap();

            let mut updated = item.clone();
            updated.title = "renamed".to_string();
            use_case.update_item(&updated).await;

            assert_eq!(mirror.document("u1"), Some(vec![updated]));
        }
    }

    mod delete_tests {
        use super::*;

        #[tokio::test]
        async fn test_delete_removes_from_store() {
            let (repo, _mirror, use_case) = setup();
            let item = test_item("a", "u1");
            use_case.save_item(&item).await;

            use_case.delete_item(&item).await;

            assert!(repo.all_items().is_empty());
        }

        #[tokio::test]
        async fn test_mirror_after_delete_never_contains_deleted_id() {
            let (_repo, mirror, use_case) = setup();
            let keep = test_item("keep", "u1");
            let drop = test_item("drop", "u1");
            use_case.save_item(&keep).await;
            use_case.save_item(&drop).await;

            use_case.delete_item(&drop).await;

            // Corrected behavior: the mirror holds exactly the remaining
            // rows. The legacy inverted filter would have written the
            // deleted item's row (or an accidental empty list) instead.
            let doc = mirror.document("u1").unwrap();
            assert_eq!(doc, vec![keep]);
            assert!(doc.iter().all(|i| i.id != drop.id));
        }

        #[tokio::test]
        async fn test_delete_last_item_leaves_empty_mirror() {
            let (_repo, mirror, use_case) = setup();
            let item = test_item("a", "u1");
            use_case.save_item(&item).await;

            use_case.delete_item(&item).await;

            assert_eq!(mirror.document("u1"), Some(vec![]));
        }

        #[tokio::test]
        async fn test_delete_does_not_touch_other_users_mirrors() {
            let (_repo, mirror, use_case) = setup();
            let mine = test_item("a", "u1");
            let theirs = test_item("b", "u2");
            use_case.save_item(&mine).await;
            use_case.save_item(&theirs).await;

            use_case.delete_item(&mine).await;

            assert_eq!(mirror.document("u2"), Some(vec![theirs]));
        }
    }

    mod delete_all_tests {
        use super::*;

        #[tokio::test]
        async fn test_delete_all_wipes_every_user() {
            let (repo, _mirror, use_case) = setup();
            use_case.save_item(&test_item("a", "u1")).await;
            use_case.save_item(&test_item("b", "u2")).await;

            use_case.delete_all_items().await;

            assert!(repo.all_items().is_empty());
        }
    }
}
