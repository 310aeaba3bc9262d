use async_trait::async_trait;
use dashmap::DashMap;
use shop_types::ports::key_value_store::{KeyValueStore, StoreError};
use std::sync::Arc;

#[derive(Clone)]
pub struct InMemoryStore {
    pub map: Arc<DashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.map.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.map.remove(key).is_some())
    }
}
