use std::{fmt, sync::Arc};

use axum::extract::FromRef;
use trivia_db::{PgStore, TriviaStore};

use crate::ApiConfig;

/// Shared handle to whichever store backs the API
pub type SharedStore = Arc<dyn TriviaStore>;

#[derive(Clone)]
pub struct ApiState {
    pub store: SharedStore,
}

impl ApiState {
    pub fn new(store: impl TriviaStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Connect to PostgreSQL, run migrations and wrap the pool in a [`PgStore`].
    pub async fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let (url, max_connections) = (&config.database_url, config.db_max_connections);
        let pool = trivia_db::create_pool(url, max_connections).await?;
        trivia_db::ensure_db_and_migrate(url, &pool).await?;
        tracing::info!(
            max_connections,
            "Database pool ready and migrations applied"
        );

        Ok(Self::new(PgStore::new(pool)))
    }
}

impl fmt::Debug for ApiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiState").finish_non_exhaustive()
    }
}

impl FromRef<ApiState> for SharedStore {
    fn from_ref(state: &ApiState) -> Self {
        state.store.clone()
    }
}
