pub mod statements;

pub use statements::{LedgerResponse, TransactionDto, ViewRequest, ViewResponse};
