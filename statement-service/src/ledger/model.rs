//! Canonical ledger types and the coercion helpers used at the untrusted
//! JSON boundary.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Currency used when neither the statement nor any transaction names one.
pub const DEFAULT_CURRENCY: &str = "£";

/// Substituted when a transaction description trims to nothing.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// One validated movement of funds. `amount` is signed: positive is a credit
/// (money in), negative is a debit (money out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
}

/// The full validated statement result. Built once per upload request,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub name: Option<String>,
    pub address: Option<String>,
    pub date: Option<String>,
    pub starting_balance: Option<Decimal>,
    pub ending_balance: Option<Decimal>,
    pub currency: String,
    pub transactions: Vec<Transaction>,
    /// Tri-state reconciliation verdict; `None` means indeterminate.
    pub reconciles: Option<bool>,
}

impl Ledger {
    /// The shape returned alongside an extraction failure, so consumers never
    /// have to special-case the error path structurally.
    pub fn empty() -> Self {
        Self {
            name: None,
            address: None,
            date: None,
            starting_balance: None,
            ending_balance: None,
            currency: DEFAULT_CURRENCY.to_string(),
            transactions: Vec::new(),
            reconciles: None,
        }
    }
}

/// Formats an amount to exactly two decimal places, the statement's minor
/// currency unit.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Returns the string value iff the JSON value is a string.
pub(crate) fn as_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// Returns the numeric value iff the JSON value is a number representable as
/// a `Decimal`. Numeric strings do not count; non-finite or out-of-range
/// floats coerce to `None`.
pub(crate) fn as_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn as_str_rejects_non_strings() {
        let value = json!({"a": 12, "b": "text", "c": null, "d": ["x"]});
        assert_eq!(as_str(value.get("a")), None);
        assert_eq!(as_str(value.get("b")), Some("text"));
        assert_eq!(as_str(value.get("c")), None);
        assert_eq!(as_str(value.get("d")), None);
        assert_eq!(as_str(value.get("missing")), None);
    }

    #[test]
    fn as_decimal_rejects_non_numbers() {
        let value = json!({"a": "12.5", "b": 12.5, "c": -3, "d": null, "e": true});
        assert_eq!(as_decimal(value.get("a")), None);
        assert_eq!(as_decimal(value.get("b")), Some(Decimal::new(125, 1)));
        assert_eq!(as_decimal(value.get("c")), Some(Decimal::from(-3)));
        assert_eq!(as_decimal(value.get("d")), None);
        assert_eq!(as_decimal(value.get("e")), None);
    }

    #[test]
    fn format_amount_always_two_places() {
        assert_eq!(format_amount(Decimal::new(-35, 1)), "-3.50");
        assert_eq!(format_amount(Decimal::from(2000)), "2000.00");
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
    }
}
