//! Per-session state.
//!
//! Each browser session owns one [`SessionContext`]. It is created when the
//! session first touches the dashboard, seeded once from the data file, and
//! dropped when the session expires.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shoe_inventory_core::Inventory;

/// The live inventory of one session.
///
/// Cheap to clone; clones share the same inventory.
#[derive(Debug, Clone)]
pub struct SessionContext {
    inventory: Arc<RwLock<Inventory>>,
}

impl SessionContext {
    /// Wrap a freshly loaded inventory.
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
        }
    }

    /// Read access to the inventory.
    pub async fn inventory(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inventory.read().await
    }

    /// Write access to the inventory.
    pub async fn inventory_mut(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inventory.write().await
    }
}

/// Session keys.
pub mod keys {
    /// Key for the UUID identifying the session's [`super::SessionContext`].
    pub const CONTEXT_ID: &str = "context_id";
}
