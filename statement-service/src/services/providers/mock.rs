//! Mock transcription provider for testing.

use super::{ProviderError, Transcriber, TranscriptionResponse};
use async_trait::async_trait;

/// A statement response that exercises the whole happy path: two
/// transactions that reconcile against the stated balances.
const CANNED_STATEMENT: &str = r#"{
    "name": "Test Account Holder",
    "address": "1 Mock Street",
    "date": "31-01-2024",
    "startingBalance": 100.00,
    "endingBalance": 2096.50,
    "currency": "£",
    "transactions": [
        {"date": "01-01-2024", "description": "Coffee Shop", "moneyIn": 0, "moneyOut": 3.5},
        {"date": "02-01-2024", "description": "Salary", "moneyIn": 2000.0, "moneyOut": 0}
    ]
}"#;

/// Mock transcriber returning a fixed response regardless of the prompt.
pub struct MockTranscriber {
    response: Option<String>,
}

impl MockTranscriber {
    /// `response` overrides the canned statement; `None` uses the default.
    pub fn new(response: Option<String>) -> Self {
        Self { response }
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, prompt: &str) -> Result<TranscriptionResponse, ProviderError> {
        let text = self
            .response
            .clone()
            .unwrap_or_else(|| CANNED_STATEMENT.to_string());

        Ok(TranscriptionResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
        })
    }
}
