//! Trait definitions for DART operations.
//!
//! The HTTP handlers only depend on [`FinancialOperations`], so the [`Dart`](crate::Dart)
//! client can be swapped for a fixture-backed implementation in tests.

use super::error::Result;
use super::options::ReportQuery;
use crate::parsing::statement::DisclosureDocument;
use async_trait::async_trait;

/// Operations for retrieving financial statement accounts.
#[async_trait]
pub trait FinancialOperations: Send + Sync {
    /// Fetches the key account lines of one filing.
    ///
    /// Returns `Ok(None)` when the upstream answered with a non-success status.
    async fn financial_statement(
        &self,
        query: &ReportQuery,
    ) -> Result<Option<DisclosureDocument>>;

    /// Parses a financial statement body from a string.
    fn financial_statement_from_string(&self, content: &str) -> Result<DisclosureDocument>;
}
