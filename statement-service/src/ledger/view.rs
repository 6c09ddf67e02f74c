//! Query/View Filter: search and pagination over a ledger's transaction
//! list. Pure and stateless; identical inputs always yield identical
//! outputs, and the ledger itself is never mutated.

use super::model::{format_amount, Transaction};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The view parameters. Revisions go through [`LedgerQuery::with_search`]
/// and [`LedgerQuery::with_page_size`], which return to the first page so a
/// shrunken filtered set can never leave the caller on an out-of-range page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerQuery {
    search: String,
    page: usize,
    page_size: usize,
}

impl Default for LedgerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerQuery {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Builds a query directly from request values. Page and page size are
    /// clamped to at least 1.
    pub fn from_parts(search: impl Into<String>, page: usize, page_size: usize) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Changes the search term; a changed term resets the page to 1.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if search != self.search {
            self.page = 1;
        }
        self.search = search;
        self
    }

    /// Changes the page size; a changed size resets the page to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page = 1;
        }
        self.page_size = page_size;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One page of filtered transactions plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub transactions: Vec<Transaction>,
    pub page: usize,
    pub page_count: usize,
    pub total_matched: usize,
}

/// Filters and paginates a transaction list.
///
/// Matching is a case-insensitive substring test against the date, the
/// description, or the amount formatted to two decimal places (so `-3.5`
/// matches both `"3.50"` and `"-3.50"`). An empty search term matches every
/// transaction. `page_count` has a floor of 1 so a valid (empty) page 1
/// always exists; a page past the end yields an empty slice.
pub fn view_transactions(transactions: &[Transaction], query: &LedgerQuery) -> LedgerView {
    let needle = query.search.to_lowercase();
    let matched: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| needle.is_empty() || matches_search(t, &needle))
        .collect();

    let total_matched = matched.len();
    let page_count = total_matched.div_ceil(query.page_size).max(1);
    // Saturate so an absurdly large page number degrades to an empty slice
    // rather than overflowing.
    let start = query.page.saturating_sub(1).saturating_mul(query.page_size);

    let transactions = matched
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .cloned()
        .collect();

    LedgerView {
        transactions,
        page: query.page,
        page_count,
        total_matched,
    }
}

fn matches_search(transaction: &Transaction, needle: &str) -> bool {
    transaction.date.to_lowercase().contains(needle)
        || transaction.description.to_lowercase().contains(needle)
        || format_amount(transaction.amount).contains(needle)
}
