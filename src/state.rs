use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;
use crate::menu::source::{HttpMenuSource, MenuSource};
use crate::storage::{KeyValueStore, MemoryKvStore, SqliteKvStore};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub kv: Arc<dyn KeyValueStore>,
    pub menu_source: Arc<dyn MenuSource>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::with_config(config).await
    }

    pub async fn with_config(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config.database_url).await?;
        let kv = Arc::new(SqliteKvStore::new(db.clone()).await?) as Arc<dyn KeyValueStore>;
        let menu_source =
            Arc::new(HttpMenuSource::new(config.menu_api_url.clone())) as Arc<dyn MenuSource>;

        Ok(Self {
            db,
            config: Arc::new(config),
            kv,
            menu_source,
        })
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        kv: Arc<dyn KeyValueStore>,
        menu_source: Arc<dyn MenuSource>,
    ) -> Self {
        Self {
            db,
            config,
            kv,
            menu_source,
        }
    }

    pub async fn in_memory(menu_source: Arc<dyn MenuSource>) -> anyhow::Result<Self> {
        let db = db::connect_in_memory().await?;
        Ok(Self {
            db,
            config: Arc::new(AppConfig::default()),
            kv: Arc::new(MemoryKvStore::new()),
            menu_source,
        })
    }
}
