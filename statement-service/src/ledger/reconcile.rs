//! Reconciliation Engine: checks that the starting balance plus the sum of
//! all transaction amounts equals the ending balance.

use super::model::Transaction;
use rust_decimal::{Decimal, RoundingStrategy};

/// Computes the tri-state reconciliation verdict.
///
/// Returns `None` when either balance is missing (insufficient data to
/// judge). Otherwise both sides are rounded to two decimal places using
/// half-away-from-zero before comparison, matching minor-currency-unit
/// semantics.
pub fn reconcile(
    starting: Option<Decimal>,
    ending: Option<Decimal>,
    transactions: &[Transaction],
) -> Option<bool> {
    let (starting, ending) = match (starting, ending) {
        (Some(s), Some(e)) => (s, e),
        _ => return None,
    };

    let sum: Decimal = transactions.iter().map(|t| t.amount).sum();
    let computed = round_minor(starting + sum);
    let stated = round_minor(ending);

    Some(computed == stated)
}

fn round_minor(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
