//! Financial statement lookups against the DART open API.
//!
//! Implements [`FinancialOperations`] for [`Dart`] on top of the multi-company key
//! account endpoint, `fnlttMultiAcnt.xml`. The network method returns a parsed
//! [`DisclosureDocument`]; the `*_from_string` companion parses a body obtained some
//! other way, which is how fixtures are tested.

use super::Dart;
use super::FinancialOperations;
use super::error::Result;
use super::options::ReportQuery;
use crate::parsing::statement::{DisclosureDocument, StatementParser};
use async_trait::async_trait;

/// Resource name of the key account endpoint.
pub const KEY_ACCOUNTS_RESOURCE: &str = "fnlttMultiAcnt.xml";

/// # Examples
///
/// ```ignore
/// use dartkit::{Dart, FinancialOperations, ReportQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dart = Dart::new("your-api-key")?;
///     let query = ReportQuery::new("00126380", "2023");
///
///     match dart.financial_statement(&query).await? {
///         Some(doc) => println!("{} account lines", doc.items.len()),
///         None => println!("no data"),
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
impl FinancialOperations for Dart {
    async fn financial_statement(
        &self,
        query: &ReportQuery,
    ) -> Result<Option<DisclosureDocument>> {
        let url = self.url(KEY_ACCOUNTS_RESOURCE, query)?;

        let Some(content) = self.get(&url).await? else {
            tracing::warn!(
                corp_code = %query.corp_code,
                bsns_year = %query.bsns_year,
                reprt_code = %query.reprt_code,
                "DART returned no data"
            );
            return Ok(None);
        };

        let doc = self.financial_statement_from_string(&content)?;
        if !doc.is_ok() {
            tracing::warn!(
                corp_code = %query.corp_code,
                status = doc.status.as_deref().unwrap_or_default(),
                message = doc.message.as_deref().unwrap_or_default(),
                "DART reported a non-success status"
            );
        }
        tracing::debug!(
            corp_code = %query.corp_code,
            items = doc.items.len(),
            "Fetched financial statement"
        );

        Ok(Some(doc))
    }

    fn financial_statement_from_string(&self, content: &str) -> Result<DisclosureDocument> {
        StatementParser::new().parse(content)
    }
}
