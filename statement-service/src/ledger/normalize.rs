//! Transaction Normalizer: reshapes untrusted raw entries into canonical
//! transactions.
//!
//! The policy is permissive-drop: entries that are malformed (non-string
//! date/description, negative magnitudes) or ambiguous (both a credit and a
//! debit amount) are excluded from the ledger rather than surfaced as
//! errors. A call over any input always succeeds.

use super::model::{as_decimal, as_str, Transaction, DEFAULT_CURRENCY, UNKNOWN_DESCRIPTION};
use rust_decimal::Decimal;
use serde_json::Value;

/// Normalizes a raw transaction sequence, preserving order of appearance.
/// `statement_currency` is the statement-level default used when an entry
/// does not name its own currency.
pub fn normalize_entries(entries: &[Value], statement_currency: Option<&str>) -> Vec<Transaction> {
    entries
        .iter()
        .filter_map(|entry| normalize_entry(entry, statement_currency))
        .collect()
}

pub(crate) fn normalize_entry(
    entry: &Value,
    statement_currency: Option<&str>,
) -> Option<Transaction> {
    let Some(date) = as_str(entry.get("date")) else {
        tracing::debug!("dropping entry: date is not a string");
        return None;
    };
    let Some(description) = as_str(entry.get("description")) else {
        tracing::debug!("dropping entry: description is not a string");
        return None;
    };

    // Non-numeric values (including numeric strings) resolve to zero.
    let money_in = as_decimal(entry.get("moneyIn")).unwrap_or(Decimal::ZERO);
    let money_out = as_decimal(entry.get("moneyOut")).unwrap_or(Decimal::ZERO);

    if money_in > Decimal::ZERO && money_out > Decimal::ZERO {
        tracing::debug!(%money_in, %money_out, "dropping ambiguous entry: both credit and debit");
        return None;
    }
    if money_in < Decimal::ZERO || money_out < Decimal::ZERO {
        tracing::debug!(%money_in, %money_out, "dropping invalid entry: negative magnitude");
        return None;
    }

    let amount = if money_in > Decimal::ZERO {
        money_in
    } else {
        -money_out
    };

    let date = date.trim();
    if date.is_empty() {
        tracing::debug!("dropping entry: date is empty");
        return None;
    }

    let description = description.trim();
    let description = if description.is_empty() {
        UNKNOWN_DESCRIPTION.to_string()
    } else {
        description.to_string()
    };

    let currency = as_str(entry.get("currency"))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or(statement_currency)
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string();

    Some(Transaction {
        date: date.to_string(),
        description,
        amount,
        currency,
    })
}
