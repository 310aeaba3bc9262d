use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Backend(String),
}

/// String key-value persistence. Writes are last-write-wins; no transactions.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Returns whether a value was present.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
