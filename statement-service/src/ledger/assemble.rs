//! Statement Assembler: the single place where the untrusted transcription
//! response crosses into trusted types.

use super::model::{as_decimal, as_str, Ledger, DEFAULT_CURRENCY};
use super::normalize::normalize_entries;
use super::reconcile::reconcile;
use serde_json::Value;
use thiserror::Error;

/// Terminal assembly failure: the transcription response could not be
/// interpreted as structured data at all. Entry-level problems never produce
/// this; they are dropped during normalization.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("transcription response was empty")]
    EmptyResponse,

    #[error("transcription response did not contain a JSON object")]
    NoJsonObject,

    #[error("failed to parse transcription response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Builds a [`Ledger`] from the raw transcription response text.
///
/// The provider returns a text blob expected to contain JSON, possibly
/// wrapped in markdown fences or prose; the payload is taken as the span
/// from the first `{` to the last `}`. Header fields coerce to `None` on
/// type mismatch, a missing or non-array `transactions` field is treated as
/// empty, and the statement currency resolves via explicit currency, then
/// the first transaction's currency, then the default symbol.
pub fn assemble_statement(response_text: &str) -> Result<Ledger, ExtractionError> {
    let payload = locate_json_object(response_text)?;
    let parsed: Value = serde_json::from_str(payload)?;
    if !parsed.is_object() {
        return Err(ExtractionError::NoJsonObject);
    }

    let statement_currency = as_str(parsed.get("currency"))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let empty = Vec::new();
    let raw_entries = parsed
        .get("transactions")
        .and_then(Value::as_array)
        .unwrap_or(&empty);
    let transactions = normalize_entries(raw_entries, statement_currency.as_deref());

    let starting_balance = as_decimal(parsed.get("startingBalance"));
    let ending_balance = as_decimal(parsed.get("endingBalance"));
    let reconciles = reconcile(starting_balance, ending_balance, &transactions);

    let currency = statement_currency
        .or_else(|| transactions.first().map(|t| t.currency.clone()))
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    Ok(Ledger {
        name: as_str(parsed.get("name")).map(str::to_string),
        address: as_str(parsed.get("address")).map(str::to_string),
        date: as_str(parsed.get("date")).map(str::to_string),
        starting_balance,
        ending_balance,
        currency,
        transactions,
        reconciles,
    })
}

fn locate_json_object(text: &str) -> Result<&str, ExtractionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let start = trimmed.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = trimmed.rfind('}').ok_or(ExtractionError::NoJsonObject)?;
    if end < start {
        return Err(ExtractionError::NoJsonObject);
    }

    Ok(&trimmed[start..=end])
}
