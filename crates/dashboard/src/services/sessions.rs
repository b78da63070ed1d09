//! Registry of live session contexts.
//!
//! Contexts are held in a `moka` cache keyed by a per-session UUID. The cache
//! evicts a context after the same period of inactivity that expires its
//! session cookie.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::instrument;
use uuid::Uuid;

use shoe_inventory_core::{Inventory, StoreInfo};

use crate::models::SessionContext;
use crate::storage::{RepositoryError, ShoeRepository};

/// Upper bound on concurrently live sessions.
const MAX_SESSIONS: u64 = 10_000;

/// Creates, seeds and hands out session contexts.
#[derive(Clone)]
pub struct SessionContexts {
    cache: Cache<Uuid, SessionContext>,
    repository: Arc<ShoeRepository>,
    store: StoreInfo,
}

impl SessionContexts {
    /// Create an empty registry.
    ///
    /// `idle` is how long an unused context is kept.
    #[must_use]
    pub fn new(repository: Arc<ShoeRepository>, store: StoreInfo, idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_SESSIONS)
            .time_to_idle(idle)
            .build();

        Self {
            cache,
            repository,
            store,
        }
    }

    /// Get the context for `id`, creating and seeding it on first use.
    ///
    /// A new context starts with every row of the data file; a missing file
    /// gives an empty inventory. Concurrent first requests for one `id` share
    /// a single seeding.
    ///
    /// # Errors
    ///
    /// Returns the `RepositoryError` of the seeding load if an existing data
    /// file cannot be read. Nothing is cached in that case.
    #[instrument(skip(self))]
    pub async fn get_or_seed(&self, id: Uuid) -> Result<SessionContext, Arc<RepositoryError>> {
        self.cache
            .try_get_with(id, async {
                let mut inventory = Inventory::new(self.store.clone());
                inventory.replace_all(self.repository.load_or_empty().await?);
                tracing::info!(records = inventory.len(), "Seeded session inventory");
                Ok(SessionContext::new(inventory))
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shoe_inventory_core::{Category, ShoeId, ShoeRecord};

    use super::*;

    fn record(id: &str) -> ShoeRecord {
        ShoeRecord {
            id: ShoeId::from(id),
            brand: "Ortuseight".to_string(),
            model: "Catalyst".to_string(),
            category: Category::Football,
            color: "Green".to_string(),
            size_eu: 41,
            price_idr: Decimal::from(450_000),
        }
    }

    fn contexts(dir: &tempfile::TempDir) -> SessionContexts {
        let repository = Arc::new(ShoeRepository::new(dir.path().join("shoes_data.csv")));
        SessionContexts::new(repository, StoreInfo::default(), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_missing_file_seeds_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let context = contexts(&dir).get_or_seed(Uuid::new_v4()).await.unwrap();
        assert!(context.inventory().await.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_once_per_session() {
        let dir = tempfile::tempdir().unwrap();
        let contexts = contexts(&dir);
        let repository = ShoeRepository::new(dir.path().join("shoes_data.csv"));
        repository.append_row(&record("1")).await.unwrap();

        let id = Uuid::new_v4();
        let first = contexts.get_or_seed(id).await.unwrap();
        assert_eq!(first.inventory().await.len(), 1);

        // Later file changes are not merged into a live session.
        repository.append_row(&record("2")).await.unwrap();
        let again = contexts.get_or_seed(id).await.unwrap();
        assert_eq!(again.inventory().await.len(), 1);

        // A new session sees the current file.
        let other = contexts.get_or_seed(Uuid::new_v4()).await.unwrap();
        assert_eq!(other.inventory().await.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_share_one_context() {
        let dir = tempfile::tempdir().unwrap();
        let contexts = contexts(&dir);
        let id = Uuid::new_v4();

        let (first, second) = tokio::join!(contexts.get_or_seed(id), contexts.get_or_seed(id));
        let (first, second) = (first.unwrap(), second.unwrap());

        first.inventory_mut().await.append(record("5"));
        assert_eq!(second.inventory().await.len(), 1);
        let again = contexts.get_or_seed(id).await.unwrap();
        assert_eq!(again.inventory().await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_seed_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let contexts = contexts(&dir);
        let path = dir.path().join("shoes_data.csv");
        let header = "shoes_id,brand,model,category,color,size_eu,price_idr\n";
        std::fs::write(&path, format!("{header}1,A,B,Boots,Red,40,cheap\n")).unwrap();

        let id = Uuid::new_v4();
        assert!(contexts.get_or_seed(id).await.is_err());

        std::fs::write(&path, header).unwrap();
        assert!(contexts.get_or_seed(id).await.unwrap().inventory().await.is_empty());
    }

    #[tokio::test]
    async fn test_appends_are_visible_to_the_same_session() {
        let dir = tempfile::tempdir().unwrap();
        let contexts = contexts(&dir);
        let id = Uuid::new_v4();

        contexts
            .get_or_seed(id)
            .await
            .unwrap()
            .inventory_mut()
            .await
            .append(record("9"));

        let context = contexts.get_or_seed(id).await.unwrap();
        assert_eq!(context.inventory().await.football_shoes().len(), 1);
    }
}
