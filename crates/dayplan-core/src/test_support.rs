//! In-memory port fakes shared by use-case and state-store tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;

use crate::domain::{ToDoItem, User};
use crate::ports::{CredentialRepository, ItemMirror, ItemRepository};

/// In-memory `ItemRepository` backed by a Vec
///
/// `set_failing(true)` makes every operation return an error, for
/// exercising the use-case layer's log-and-swallow policy.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<ToDoItem>>,
    failing: AtomicBool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn all_items(&self) -> Vec<ToDoItem> {
        self.items.lock().unwrap().clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("simulated storage failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save_item(&self, item: &ToDoItem) -> anyhow::Result<()> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.id == item.id) {
            return Err(anyhow!("duplicate item id {}", item.id));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn fetch_items(&self, user_id: &str) -> anyhow::Result<Vec<ToDoItem>> {
        self.check()?;
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_item(&self, item: &ToDoItem) -> anyhow::Result<()> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            *existing = item.clone();
        }
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> anyhow::Result<()> {
        self.check()?;
        self.items.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn delete_all_items(&self) -> anyhow::Result<()> {
        self.check()?;
        self.items.lock().unwrap().clear();
        Ok(())
    }
}

/// In-memory `ItemMirror` backed by a map keyed by user id
#[derive(Default)]
pub struct InMemoryMirror {
    documents: Mutex<HashMap<String, Vec<ToDoItem>>>,
    failing: AtomicBool,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn document(&self, user_id: &str) -> Option<Vec<ToDoItem>> {
        self.documents.lock().unwrap().get(user_id).cloned()
    }

    /// Seeds a document directly, bypassing the port
    pub fn seed(&self, user_id: &str, items: Vec<ToDoItem>) {
        self.documents
            .lock()
            .unwrap()
            .insert(user_id.to_string(), items);
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("simulated mirror failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl ItemMirror for InMemoryMirror {
    async fn save_items(&self, items: &[ToDoItem], user_id: &str) -> anyhow::Result<()> {
        self.check()?;
        self.documents
            .lock()
            .unwrap()
            .insert(user_id.to_string(), items.to_vec());
        Ok(())
    }

    async fn load_items(&self, user_id: &str) -> anyhow::Result<Option<Vec<ToDoItem>>> {
        self.check()?;
        Ok(self.documents.lock().unwrap().get(user_id).cloned())
    }
}

/// In-memory `CredentialRepository` with a map of users and a session slot
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    users: Mutex<HashMap<String, User>>,
    session: Mutex<Option<String>>,
    failing: AtomicBool,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("simulated storage failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn save_user(&self, user: &User) -> anyhow::Result<()> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(anyhow!("duplicate user id {}", user.id));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<User>> {
        self.check()?;
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn user_exists(&self, user_id: &str) -> anyhow::Result<bool> {
        self.check()?;
        Ok(self.users.lock().unwrap().contains_key(user_id))
    }

    async fn logged_in_user(&self) -> anyhow::Result<Option<String>> {
        self.check()?;
        Ok(self.session.lock().unwrap().clone())
    }

    async fn set_logged_in_user(&self, user_id: Option<&str>) -> anyhow::Result<()> {
        self.check()?;
        *self.session.lock().unwrap() = user_id.map(|s| s.to_string());
        Ok(())
    }
}

/// Convenience constructor for test items
pub fn test_item(id: &str, user_id: &str) -> ToDoItem {
    ToDoItem {
        id: id.to_string(),
        title: format!("item {id}"),
        description: String::new(),
        start_date: "2025-06-10 09:00".to_string(),
        end_date: "2025-06-10 17:00".to_string(),
        user_id: user_id.to_string(),
        priority: crate::domain::Priority::Medium,
    }
}
