//! The normalization, validation, and reconciliation core.
//!
//! Everything upstream of this module (text extraction, transcription) is an
//! untrusted, non-deterministic producer; everything downstream (handlers,
//! DTOs) consumes the trusted types produced here.

pub mod assemble;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod view;

pub use assemble::{assemble_statement, ExtractionError};
pub use model::{Ledger, Transaction, DEFAULT_CURRENCY, UNKNOWN_DESCRIPTION};
pub use normalize::normalize_entries;
pub use reconcile::reconcile;
pub use view::{view_transactions, LedgerQuery, LedgerView};
