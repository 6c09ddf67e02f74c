use crate::ledger::view::DEFAULT_PAGE_SIZE;
use crate::ledger::{Ledger, LedgerView, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub date: String,
    pub desc: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            date: t.date,
            desc: t.description,
            amount: t.amount,
            currency: t.currency,
        }
    }
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            date: dto.date,
            description: dto.desc,
            amount: dto.amount,
            currency: dto.currency,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerResponse {
    pub name: Option<String>,
    pub address: Option<String>,
    pub date: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub starting_balance: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub ending_balance: Option<Decimal>,
    pub currency: String,
    pub transactions: Vec<TransactionDto>,
    pub reconciles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LedgerResponse {
    /// The failure shape: every field defaulted, `error` populated.
    pub fn failed(error: impl Into<String>) -> Self {
        let mut response = Self::from(Ledger::empty());
        response.error = Some(error.into());
        response
    }
}

impl From<Ledger> for LedgerResponse {
    fn from(ledger: Ledger) -> Self {
        Self {
            name: ledger.name,
            address: ledger.address,
            date: ledger.date,
            starting_balance: ledger.starting_balance,
            ending_balance: ledger.ending_balance,
            currency: ledger.currency,
            transactions: ledger.transactions.into_iter().map(Into::into).collect(),
            reconciles: ledger.reconciles,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    #[serde(default)]
    pub transactions: Vec<TransactionDto>,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub transactions: Vec<TransactionDto>,
    pub page: usize,
    pub page_count: usize,
    pub total_matched: usize,
}

impl From<LedgerView> for ViewResponse {
    fn from(view: LedgerView) -> Self {
        Self {
            transactions: view.transactions.into_iter().map(Into::into).collect(),
            page: view.page,
            page_count: view.page_count,
            total_matched: view.total_matched,
        }
    }
}
