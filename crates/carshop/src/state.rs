//! Application state with repository-based storage.
//!
//! Every handler receives the repositories as trait objects. All three
//! point at the same backend instance, so they share one store handle.

use std::sync::Arc;

use carshop_core::storage::{CarRepository, OrderRepository, PersonRepository, RepositoryError};

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub person_repo: Arc<dyn PersonRepository>,
    pub car_repo: Arc<dyn CarRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Wires all repositories to a single backend.
    pub fn new<R>(repo: R) -> Self
    where
        R: PersonRepository + CarRepository + OrderRepository + 'static,
    {
        let repo = Arc::new(repo);
        Self {
            person_repo: repo.clone(),
            car_repo: repo.clone(),
            order_repo: repo,
        }
    }

    /// Opens the SQLite database and ensures the schema exists.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> Result<Self, RepositoryError> {
        let repo = crate::storage::SqliteRepository::new(&config.sqlite_path).await?;
        Ok(Self::new(repo))
    }

    /// Starts with empty in-memory tables.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> Result<Self, RepositoryError> {
        tracing::warn!("Using in-memory storage, data will not survive a restart");
        Ok(Self::new(crate::storage::InMemoryRepository::new()))
    }

    /// Fresh state over an empty store of the active backend.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        #[cfg(feature = "sqlite")]
        let repo = crate::storage::SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite should open");
        #[cfg(feature = "inmemory")]
        let repo = crate::storage::InMemoryRepository::new();

        Self::new(repo)
    }
}
