use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::{fs, sync::RwLock};

/// Persistence boundary: a string key-value store that survives restarts.
/// Holds the profile fields and the serialized reading history.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: one file per key under the data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub async fn new(data_dir: &PathBuf) -> Result<Self> {
        fs::create_dir_all(data_dir).await?;
        Ok(Self {
            data_dir: data_dir.clone(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are simple identifiers ("language", "reading_history", ...).
        self.data_dir.join(format!("{key}.txt"))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).await.ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mem_store_round_trips() {
        let store = MemStore::new();
        assert_eq!(store.get("language").await, None);
        store.set("language", "ar").await.unwrap();
        assert_eq!(store.get("language").await.as_deref(), Some("ar"));
        store.remove("language").await.unwrap();
        assert_eq!(store.get("language").await, None);
    }

    #[tokio::test]
    async fn file_store_round_trips() {
        let dir = std::env::temp_dir().join(format!(
            "falak-store-test-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let store = FileStore::new(&dir).await.unwrap();
        store.set("user_name", "Sara").await.unwrap();
        assert_eq!(store.get("user_name").await.as_deref(), Some("Sara"));

        // Removing twice is a no-op, not an error.
        store.remove("user_name").await.unwrap();
        store.remove("user_name").await.unwrap();
        assert_eq!(store.get("user_name").await, None);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
