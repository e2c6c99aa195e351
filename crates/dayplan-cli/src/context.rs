//! Composition root for CLI commands
//!
//! Each invocation builds the full object graph from the configuration:
//! database pool, repositories, mirror, use cases, and the state store.
//! Nothing here is a global; commands receive an [`AppContext`] and the
//! graph is dropped when the process exits.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use dayplan_core::config::Config;
use dayplan_core::ports::{CredentialRepository, ItemMirror, ItemRepository, PlaintextVerifier};
use dayplan_core::state::{AppStore, ItemEffects};
use dayplan_core::usecases::{ItemUseCase, UserUseCase};
use dayplan_mirror::JsonItemMirror;
use dayplan_store::{DatabasePool, SqliteCredentialRepository, SqliteItemRepository};

/// Fully wired application graph for one CLI invocation
pub struct AppContext {
    items: Arc<dyn ItemRepository>,
    mirror: Arc<dyn ItemMirror>,
    credentials: Arc<dyn CredentialRepository>,
}

impl AppContext {
    /// Builds the graph from a config file, or defaults when absent
    pub async fn init(config_path: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(Path::new(path))
                .with_context(|| format!("Failed to load config from {}", path))?,
            None => Config::load_or_default(&Config::default_path()),
        };
        Self::from_config(&config).await
    }

    /// Builds the graph against the paths named in `config`
    pub async fn from_config(config: &Config) -> Result<Self> {
        let pool = DatabasePool::new(&config.storage.database_path)
            .await
            .context("Failed to open database")?;

        let items: Arc<dyn ItemRepository> =
            Arc::new(SqliteItemRepository::new(pool.pool().clone()));
        let credentials: Arc<dyn CredentialRepository> =
            Arc::new(SqliteCredentialRepository::new(pool.pool().clone()));
        let mirror: Arc<dyn ItemMirror> =
            Arc::new(JsonItemMirror::new(config.storage.mirror_dir.clone()));

        Ok(Self {
            items,
            mirror,
            credentials,
        })
    }

    /// Item use case over the wired repositories
    pub fn item_use_case(&self) -> ItemUseCase {
        ItemUseCase::new(self.items.clone(), self.mirror.clone())
    }

    /// User use case with plain-equality secret verification
    pub fn user_use_case(&self) -> UserUseCase {
        UserUseCase::new(self.credentials.clone(), Arc::new(PlaintextVerifier))
    }

    /// A fresh state store driving the item use case
    pub fn store(&self) -> AppStore {
        AppStore::new(ItemEffects::new(self.item_use_case()))
    }
}
