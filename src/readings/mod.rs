//! Feature orchestrators. Every reading follows the same sequence:
//! validate inputs, build the canonical title, check the history for a
//! same-day record, and only on a cache miss stream a fresh reading —
//! persisting it when generation completed cleanly.

pub mod prompts;

mod compatibility;
mod falk_lyom;
mod gematria;
mod horoscope;
mod love;
mod numerology;
mod talee;
mod tarot;

pub use compatibility::CompatibilityOutcome;
pub use falk_lyom::FalkLyomOutcome;
pub use gematria::GematriaOutcome;
pub use horoscope::HoroscopeSource;
pub use tarot::TarotOutcome;

use crate::config::Config;
use crate::generation::{GenerationBackend, GenerationError, TextGenerator};
use crate::history::{HistoryStore, ReadingKind};
use crate::profile::ProfileService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReadingError {
    /// Missing or malformed user input. Handled before any network call
    /// or history lookup.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// The daily-horoscope upstream failed.
    #[error("Horoscope source error: {0}")]
    Source(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingOutcome {
    /// Canonical title — the same-day cache key.
    pub title: String,
    /// The persisted/persistable content string. For Tarot and Falk Lyom
    /// this is a serialized [`CardReading`].
    pub content: String,
    pub from_cache: bool,
}

/// Record content for the card-drawing features: the drawn card together
/// with its interpretation, stored as one JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardReading<C> {
    pub card: C,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnTarotCard {
    pub english: String,
    pub arabic: String,
}

impl From<&crate::cards::TarotCard> for DrawnTarotCard {
    fn from(card: &crate::cards::TarotCard) -> Self {
        Self {
            english: card.english.to_string(),
            arabic: card.arabic.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnMoroccanCard {
    pub name: String,
    pub key: String,
}

impl From<&crate::cards::MoroccanCard> for DrawnMoroccanCard {
    fn from(card: &crate::cards::MoroccanCard) -> Self {
        Self {
            name: card.name.to_string(),
            key: card.key.to_string(),
        }
    }
}

/// The reading service: scoring + generation client + history store
/// composed behind one method per feature.
pub struct Readings {
    generator: TextGenerator,
    history: Arc<HistoryStore>,
    profile: Arc<ProfileService>,
    horoscope_source: HoroscopeSource,
}

impl Readings {
    pub fn new(
        config: &Config,
        backend: Arc<dyn GenerationBackend>,
        history: Arc<HistoryStore>,
        profile: Arc<ProfileService>,
    ) -> Self {
        Self {
            generator: TextGenerator::new(backend),
            history,
            profile,
            horoscope_source: HoroscopeSource::new(config),
        }
    }

    pub(crate) fn generator(&self) -> &TextGenerator {
        &self.generator
    }

    pub(crate) fn profile(&self) -> &ProfileService {
        &self.profile
    }

    pub(crate) fn horoscope_source(&self) -> &HoroscopeSource {
        &self.horoscope_source
    }

    /// The caching-before-generation protocol shared by every feature.
    ///
    /// On a same-day cache hit the stored record is returned as-is with
    /// `from_cache` set; the generation client is never invoked and no
    /// new record is written. Otherwise `generate` produces the full
    /// content string (streaming its deltas to the caller as it goes) and
    /// the result is recorded — unless it is empty, the feature's
    /// `persist_guard` rejects it (everything except Horoscope passes
    /// `|_| true`), or generation failed.
    pub(crate) async fn cached_or_generate<F, Fut>(
        &self,
        kind: ReadingKind,
        title: String,
        persist_guard: fn(&str) -> bool,
        generate: F,
    ) -> Result<ReadingOutcome, ReadingError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, ReadingError>>,
    {
        if let Some(record) = self.history.find_today(kind, &title).await {
            debug!(kind = kind.as_str(), title, "serving today's cached reading");
            return Ok(ReadingOutcome {
                title,
                content: record.content,
                from_cache: true,
            });
        }

        let content = generate().await?;

        if !content.is_empty() && persist_guard(&content) {
            self.history.add(kind, &title, &content).await?;
            info!(kind = kind.as_str(), title, "reading recorded");
        }

        Ok(ReadingOutcome {
            title,
            content,
            from_cache: false,
        })
    }
}

pub(crate) fn require_input(value: &str, message: &str) -> Result<(), ReadingError> {
    if value.trim().is_empty() {
        Err(ReadingError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::generation::StreamEvent;
    use crate::storage::MemStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::sync::mpsc;

    /// Backend returning a fixed script of fragments, counting calls.
    pub struct ScriptedBackend {
        pub fragments: Vec<&'static str>,
        pub fail: bool,
        pub calls: AtomicU32,
    }

    impl ScriptedBackend {
        pub fn ok(fragments: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self { fragments, fail: false, calls: AtomicU32::new(0) })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self { fragments: Vec::new(), fail: true, calls: AtomicU32::new(0) })
        }

        pub fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GenerationError::QuotaExhausted);
            }
            Ok(self.fragments.concat())
        }

        async fn open_stream(
            &self,
            _prompt: &str,
        ) -> Result<mpsc::Receiver<Result<String, GenerationError>>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GenerationError::QuotaExhausted);
            }
            let (tx, rx) = mpsc::channel(16);
            let fragments = self.fragments.clone();
            tokio::spawn(async move {
                for f in fragments {
                    let _ = tx.send(Ok(f.to_string())).await;
                }
            });
            Ok(rx)
        }
    }

    pub struct Fixture {
        pub readings: Readings,
        pub history: Arc<HistoryStore>,
        pub profile: Arc<ProfileService>,
    }

    pub async fn fixture(backend: Arc<dyn GenerationBackend>) -> Fixture {
        let config = Config {
            api_key: "test".into(),
            api_url: "http://localhost/v1beta".into(),
            model: "test-model".into(),
            horoscope_api_key: "test".into(),
            horoscope_url: "http://localhost/horoscope".into(),
            data_dir: "unused".into(),
        };
        let kv = Arc::new(MemStore::new());
        let profile = ProfileService::load(kv.clone()).await.unwrap();
        profile.set_user_name("Sara").await.unwrap();
        let history = HistoryStore::load(kv, profile.clone()).await;
        Fixture {
            readings: Readings::new(&config, backend, history.clone(), profile.clone()),
            history,
            profile,
        }
    }

    pub fn sink() -> mpsc::Sender<StreamEvent> {
        let (tx, mut rx) = mpsc::channel(64);
        tokio::spawn(async move { while rx.recv().await.is_some() {} });
        tx
    }
}
