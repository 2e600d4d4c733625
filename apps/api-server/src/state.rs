//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state.
    ///
    /// Storage is selected by configuration: a configured database must
    /// connect or this returns an error and the server does not start.
    /// With no database configured the in-memory store is used, announced
    /// once at startup. There is no error-path fallback between the two.
    pub async fn new(config: &AppConfig) -> Result<Self, String> {
        let posts = Self::select_store(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }

    #[cfg(feature = "postgres")]
    async fn select_store(config: &AppConfig) -> Result<Arc<dyn PostStore>, String> {
        use quill_infra::PostgresPostStore;
        use quill_infra::store::connect;

        match &config.database {
            Some(db_config) => {
                let conn = connect(db_config)
                    .await
                    .map_err(|e| format!("Failed to connect to database: {e}"))?;
                Ok(Arc::new(PostgresPostStore::new(conn)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Posts are stored in memory only.");
                Ok(Arc::new(InMemoryPostStore::new()))
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn select_store(config: &AppConfig) -> Result<Arc<dyn PostStore>, String> {
        if config.database.is_some() {
            return Err(
                "DATABASE_URL is set but this build has no postgres support".to_string(),
            );
        }

        tracing::info!("Running without postgres feature - posts are stored in memory only.");
        Ok(Arc::new(InMemoryPostStore::new()))
    }
}
