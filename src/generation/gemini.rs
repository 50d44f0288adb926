use crate::config::Config;
use crate::generation::{GenerationBackend, GenerationError};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> String {
        let mut out = String::new();
        for candidate in &self.candidates {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if let Some(text) = &part.text {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }
}

/// Gemini REST backend. `generateContent` for single-shot calls,
/// `streamGenerateContent?alt=sse` for streaming.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(config: &Config) -> Self {
        info!("Gemini generation backend initialized (model: {})", config.model);
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            model: config.model.clone(),
        }
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } }
        })
    }

    async fn classify_failure(resp: reqwest::Response) -> GenerationError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::TOO_MANY_REQUESTS || body.contains("RESOURCE_EXHAUSTED") {
            GenerationError::QuotaExhausted
        } else {
            GenerationError::Transient(format!("Gemini API error: {status} {body}"))
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transient(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::classify_failure(resp).await);
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Transient(e.to_string()))?;
        Ok(data.text())
    }

    async fn open_stream(
        &self,
        prompt: &str,
    ) -> Result<mpsc::Receiver<Result<String, GenerationError>>, GenerationError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transient(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::classify_failure(resp).await);
        }

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(async move {
            let mut body = resp.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk) = body.next().await {
                match chunk {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));
                        while let Some(pos) = buffer.find('\n') {
                            let line = buffer[..pos].trim_end_matches('\r').to_string();
                            buffer.drain(..=pos);
                            if let Some(text) = parse_sse_line(&line)
                                && !text.is_empty()
                                && tx.send(Ok(text)).await.is_err()
                            {
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Err(GenerationError::StreamInterrupted(e.to_string())))
                            .await;
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }
}

/// Extracts the text fragment from one SSE line, if it carries one.
/// Non-data lines (comments, blank keep-alives, event names) yield `None`.
fn parse_sse_line(line: &str) -> Option<String> {
    let payload = line.strip_prefix("data:")?.trim_start();
    let chunk: GenerateResponse = serde_json::from_str(payload).ok()?;
    Some(chunk.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHUNK: &str = r#"{"candidates":[{"content":{"parts":[{"text":"ا"},{"text":"لطالع"}]}}]}"#;

    #[test]
    fn data_lines_yield_their_text() {
        let line = format!("data: {CHUNK}");
        assert_eq!(parse_sse_line(&line).as_deref(), Some("الطالع"));
    }

    #[test]
    fn non_data_lines_are_skipped() {
        assert_eq!(parse_sse_line(""), None);
        assert_eq!(parse_sse_line(": keep-alive"), None);
        assert_eq!(parse_sse_line("event: done"), None);
        assert_eq!(parse_sse_line("data: not json"), None);
    }

    #[test]
    fn empty_candidates_flatten_to_empty_text() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(resp.text(), "");
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":null}]}"#).unwrap();
        assert_eq!(resp.text(), "");
    }
}
