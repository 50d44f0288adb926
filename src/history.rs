use crate::profile::ProfileService;
use crate::storage::KvStore;
use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

const HISTORY_KEY: &str = "reading_history";

/// Newest 50 readings are kept; older ones fall off the end.
const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingKind {
    Tarot,
    Numerology,
    Compatibility,
    Horoscope,
    #[serde(rename = "Falk Lyom")]
    FalkLyom,
    #[serde(rename = "Tale'e")]
    Talee,
    Gematria,
}

impl ReadingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tarot => "Tarot",
            Self::Numerology => "Numerology",
            Self::Compatibility => "Compatibility",
            Self::Horoscope => "Horoscope",
            Self::FalkLyom => "Falk Lyom",
            Self::Talee => "Tale'e",
            Self::Gematria => "Gematria",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Creation time in wall-clock milliseconds. Two records created in
    /// the same millisecond share an id; accepted for this domain.
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReadingKind,
    /// Localized, human-readable label; also the same-day cache key, so
    /// it must be reproducible from the same inputs.
    pub title: String,
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub date: String,
}

/// Ordered (most-recent-first), capped, persisted log of completed
/// readings. Records are only ever created whole, removed, or cleared —
/// never updated in place.
pub struct HistoryStore {
    kv: Arc<dyn KvStore>,
    profile: Arc<ProfileService>,
    records: RwLock<Vec<ReadingRecord>>,
}

impl HistoryStore {
    pub async fn load(kv: Arc<dyn KvStore>, profile: Arc<ProfileService>) -> Arc<Self> {
        let records = match kv.get(HISTORY_KEY).await {
            Some(raw) => match serde_json::from_str::<Vec<ReadingRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!("stored reading history is unreadable, starting empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Arc::new(Self {
            kv,
            profile,
            records: RwLock::new(records),
        })
    }

    /// Appends a completed reading at the front and persists. A silent
    /// no-op when no profile is active.
    pub async fn add(
        &self,
        kind: ReadingKind,
        title: &str,
        content: &str,
    ) -> Result<Option<ReadingRecord>> {
        if !self.profile.is_active().await {
            debug!("no active profile, reading not recorded");
            return Ok(None);
        }

        let now = Utc::now();
        let record = ReadingRecord {
            id: now.timestamp_millis(),
            kind,
            title: title.to_string(),
            content: content.to_string(),
            date: now.to_rfc3339(),
        };

        let mut records = self.records.write().await;
        records.insert(0, record.clone());
        records.truncate(HISTORY_CAP);
        self.persist(&records).await?;
        Ok(Some(record))
    }

    /// Removing an absent id is a successful no-op.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let mut records = self.records.write().await;
        records.retain(|r| r.id != id);
        self.persist(&records).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        self.kv.remove(HISTORY_KEY).await
    }

    /// First record (the collection is most-recent-first) of this kind
    /// with exactly this title created today, UTC.
    pub async fn find_today(&self, kind: ReadingKind, title: &str) -> Option<ReadingRecord> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.kind == kind && r.title == title && r.date.starts_with(&today))
            .cloned()
    }

    pub async fn all(&self) -> Vec<ReadingRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn persist(&self, records: &[ReadingRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.kv.set(HISTORY_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    async fn active_store() -> (Arc<MemStore>, Arc<HistoryStore>) {
        let kv = Arc::new(MemStore::new());
        let profile = ProfileService::load(kv.clone()).await.unwrap();
        profile.set_user_name("Sara").await.unwrap();
        let history = HistoryStore::load(kv.clone(), profile).await;
        (kv, history)
    }

    #[tokio::test]
    async fn cap_keeps_the_newest_fifty() {
        let (_, history) = active_store().await;
        for i in 0..60 {
            history
                .add(ReadingKind::Gematria, &format!("reading {i}"), "text")
                .await
                .unwrap();
        }
        let records = history.all().await;
        assert_eq!(records.len(), 50);
        // Most-recent-first: the last insert leads, the first ten are gone.
        assert_eq!(records[0].title, "reading 59");
        assert_eq!(records[49].title, "reading 10");
    }

    #[tokio::test]
    async fn add_is_gated_on_an_active_profile() {
        let kv = Arc::new(MemStore::new());
        let profile = ProfileService::load(kv.clone()).await.unwrap();
        let history = HistoryStore::load(kv.clone(), profile).await;

        let added = history
            .add(ReadingKind::Tarot, "Tarot Reading", "text")
            .await
            .unwrap();
        assert!(added.is_none());
        assert!(history.is_empty().await);
        assert_eq!(kv.get("reading_history").await, None);
    }

    #[tokio::test]
    async fn remove_absent_id_is_a_no_op() {
        let (_, history) = active_store().await;
        history.add(ReadingKind::Talee, "t", "c").await.unwrap();
        history.remove(12345).await.unwrap();
        assert_eq!(history.len().await, 1);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let (kv, history) = active_store().await;
        let record = history
            .add(ReadingKind::Horoscope, "Leo - daily", "stars")
            .await
            .unwrap()
            .unwrap();
        history.remove(record.id).await.unwrap();
        assert!(history.is_empty().await);

        history.add(ReadingKind::Horoscope, "Leo - daily", "stars").await.unwrap();
        history.clear().await.unwrap();
        assert!(history.is_empty().await);
        assert_eq!(kv.get("reading_history").await, None);
    }

    #[tokio::test]
    async fn collection_round_trips_through_storage() {
        let (kv, history) = active_store().await;
        history
            .add(ReadingKind::Compatibility, "Sara & Omar", "a warm analysis")
            .await
            .unwrap();
        history
            .add(ReadingKind::Gematria, "Gematria: سارة", "**66**\n\nmessage")
            .await
            .unwrap();
        let before = history.all().await;

        let profile = ProfileService::load(kv.clone()).await.unwrap();
        let reloaded = HistoryStore::load(kv.clone(), profile).await;
        assert_eq!(reloaded.all().await, before);
    }

    #[tokio::test]
    async fn kind_labels_match_the_stored_format() {
        let raw = serde_json::to_string(&ReadingKind::FalkLyom).unwrap();
        assert_eq!(raw, "\"Falk Lyom\"");
        let raw = serde_json::to_string(&ReadingKind::Talee).unwrap();
        assert_eq!(raw, "\"Tale'e\"");
    }

    #[tokio::test]
    async fn corrupt_history_recovers_to_empty() {
        let kv = Arc::new(MemStore::new());
        kv.set("reading_history", "{not json").await.unwrap();
        let profile = ProfileService::load(kv.clone()).await.unwrap();
        profile.set_user_name("Sara").await.unwrap();
        let history = HistoryStore::load(kv.clone(), profile).await;
        assert!(history.is_empty().await);

        // The store is usable again after recovery.
        history.add(ReadingKind::Tarot, "t", "c").await.unwrap();
        assert_eq!(history.len().await, 1);
    }

    #[tokio::test]
    async fn find_today_matches_kind_title_and_day() {
        let (_, history) = active_store().await;
        history
            .add(ReadingKind::Horoscope, "Leo - daily", "today's stars")
            .await
            .unwrap();

        assert!(history.find_today(ReadingKind::Horoscope, "Leo - daily").await.is_some());
        assert!(history.find_today(ReadingKind::Horoscope, "Leo - weekly").await.is_none());
        assert!(history.find_today(ReadingKind::Tarot, "Leo - daily").await.is_none());
    }

    #[tokio::test]
    async fn find_today_ignores_older_days() {
        let (kv, history) = active_store().await;
        history
            .add(ReadingKind::Gematria, "Gematria: Sara", "old")
            .await
            .unwrap();
        // Backdate the stored record by rewriting the persisted array.
        let mut records = history.all().await;
        records[0].date = "2020-01-01T09:00:00+00:00".into();
        kv.set("reading_history", &serde_json::to_string(&records).unwrap())
            .await
            .unwrap();

        let profile = ProfileService::load(kv.clone()).await.unwrap();
        let reloaded = HistoryStore::load(kv, profile).await;
        assert!(reloaded.find_today(ReadingKind::Gematria, "Gematria: Sara").await.is_none());
    }
}
