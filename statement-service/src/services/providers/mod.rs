//! Transcription provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for the
//! natural-language-to-JSON transcription backend, allowing easy swapping
//! between Gemini and a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a transcription call.
#[derive(Debug, Clone)]
pub struct TranscriptionResponse {
    /// The raw response text, expected (but not guaranteed) to contain JSON.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for transcription providers (e.g., Gemini).
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Sends the prompt and returns the raw completion text.
    async fn transcribe(&self, prompt: &str) -> Result<TranscriptionResponse, ProviderError>;
}
