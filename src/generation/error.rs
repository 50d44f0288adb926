use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The remote service signalled rate/quota limits. Never retried;
    /// retrying cannot succeed until the quota resets.
    #[error("Generation quota exhausted")]
    QuotaExhausted,
    /// Any other remote failure. Retried up to the attempt budget.
    #[error("Generation failed: {0}")]
    Transient(String),
    /// Failure after fragments started arriving. Not retried; partial
    /// text must not be persisted.
    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}
