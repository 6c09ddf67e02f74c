//! Text extraction collaborators.
//!
//! The extraction service accepts raw document bytes and returns plain
//! text; no internal structure is assumed. The HTTP implementation talks to
//! an external extractor endpoint, and the UTF-8 implementation decodes the
//! uploaded bytes directly (plain-text statements, tests).

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Error type for extraction operations.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Document contained no extractable text")]
    NoText,

    #[error("Extractor service error: {0}")]
    ServiceError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Document is not valid UTF-8 text")]
    InvalidEncoding,
}

/// Trait for document-bytes-to-plain-text extraction.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: &[u8], mime_type: &str) -> Result<String, ExtractorError>;
}

/// Extractor backed by an external HTTP service.
pub struct HttpTextExtractor {
    client: Client,
    endpoint: String,
}

impl HttpTextExtractor {
    pub fn new(endpoint: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for HttpTextExtractor {
    async fn extract(&self, data: &[u8], mime_type: &str) -> Result<String, ExtractorError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            mime_type = %mime_type,
            size = data.len(),
            "Sending document to extractor service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| ExtractorError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractorError::ServiceError(format!(
                "{}: {}",
                status, error_text
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ExtractorError::NetworkError(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractorError::NoText);
        }

        Ok(text)
    }
}

/// Extractor that treats the uploaded bytes as the text itself.
pub struct Utf8TextExtractor;

#[async_trait]
impl TextExtractor for Utf8TextExtractor {
    async fn extract(&self, data: &[u8], _mime_type: &str) -> Result<String, ExtractorError> {
        let text = std::str::from_utf8(data).map_err(|_| ExtractorError::InvalidEncoding)?;

        if text.trim().is_empty() {
            return Err(ExtractorError::NoText);
        }

        Ok(text.to_string())
    }
}
