//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::middleware::session::SESSION_EXPIRY_SECONDS;
use crate::services::SessionContexts;
use crate::storage::ShoeRepository;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the data file repository, configuration and live session contexts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    repository: Arc<ShoeRepository>,
    sessions: SessionContexts,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The data file is not touched until the first request.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let repository = Arc::new(ShoeRepository::new(config.data_file.clone()));
        let sessions = SessionContexts::new(
            Arc::clone(&repository),
            config.store.clone(),
            Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs()),
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                repository,
                sessions,
            }),
        }
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the data file repository.
    #[must_use]
    pub fn repository(&self) -> &ShoeRepository {
        &self.inner.repository
    }

    /// Get a reference to the live session contexts.
    #[must_use]
    pub fn sessions(&self) -> &SessionContexts {
        &self.inner.sessions
    }
}
