mod error;
mod gemini;

pub use error::GenerationError;
pub use gemini::GeminiBackend;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

/// Three attempts total, with a linearly growing wait between them.
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_UNIT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub enum StreamEvent {
    TextDelta(String),
    Done,
    Error(String),
}

/// Remote text-generation boundary. `open_stream`'s outer `Result` is
/// stream initiation (retryable); the channel items are fragments in
/// arrival order, with an `Err` item terminating the stream.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;

    async fn open_stream(
        &self,
        prompt: &str,
    ) -> Result<mpsc::Receiver<Result<String, GenerationError>>, GenerationError>;
}

/// Client wrapper adding the retry policy on top of a backend. Each call
/// is independent; the client holds no mutable state.
pub struct TextGenerator {
    backend: Arc<dyn GenerationBackend>,
}

impl TextGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Single-shot generation with retry. Used for pure-translation calls.
    pub async fn generate_once(&self, prompt: &str) -> Result<String, GenerationError> {
        retry(|| self.backend.complete(prompt)).await
    }

    /// Streaming generation: initiation is retried like a single-shot
    /// call, but once fragments begin arriving a failure terminates the
    /// sequence with no further retry. Fragments are forwarded to `tx` in
    /// arrival order; the accumulated full text is returned on success.
    pub async fn generate_stream(
        &self,
        prompt: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<String, GenerationError> {
        let mut rx = retry(|| self.backend.open_stream(prompt)).await?;

        let mut text = String::new();
        while let Some(item) = rx.recv().await {
            match item {
                Ok(fragment) => {
                    let _ = tx.send(StreamEvent::TextDelta(fragment.clone())).await;
                    text.push_str(&fragment);
                }
                Err(e) => {
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                    return Err(GenerationError::StreamInterrupted(e.to_string()));
                }
            }
        }

        let _ = tx.send(StreamEvent::Done).await;
        Ok(text)
    }
}

async fn retry<T, F, Fut>(op: F) -> Result<T, GenerationError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, GenerationError>>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        match op().await {
            Ok(value) => return Ok(value),
            Err(GenerationError::QuotaExhausted) => return Err(GenerationError::QuotaExhausted),
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!("generation attempt {attempt} failed, retrying: {e}");
                tokio::time::sleep(BACKOFF_UNIT * attempt).await;
            }
            Err(e) => return Err(e),
        }
    }
    unreachable!("retry loop always returns")
}
