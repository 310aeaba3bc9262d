#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a storage feature: `memory` or `sqlite`.");

use shop_types::ports::key_value_store::{KeyValueStore, StoreError};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub const DEFAULT_SQLITE_URL: &str = "sqlite://shop.db";

/// Storage backend picked at startup from the enabled features.
pub enum Store {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteStore),
}

pub async fn build_store(url: Option<&str>) -> anyhow::Result<Store> {
    Store::build_store(url).await
}

impl Store {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build_store(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self::Memory(memory::InMemoryStore::new()))
    }

    #[cfg(all(feature = "sqlite", not(feature = "memory")))]
    pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or(DEFAULT_SQLITE_URL);
        Ok(Self::Sqlite(sqlite::SqliteStore::new(url).await?))
    }

    // With both features, an explicit URL selects SQLite.
    #[cfg(all(feature = "sqlite", feature = "memory"))]
    pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Self> {
        match database_url {
            Some(url) => Ok(Self::Sqlite(sqlite::SqliteStore::new(url).await?)),
            None => Ok(Self::Memory(memory::InMemoryStore::new())),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(_) => "memory",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(store) => store.get(key).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(store) => store.set(key, value).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(store) => store.remove(key).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.remove(key).await,
        }
    }
}
