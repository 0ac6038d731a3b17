//! The per-company pipeline: fetch, extract, compute.

use crate::error::Result;
use crate::financials::{FinancialMap, extract_financials};
use crate::options::ReportQuery;
use crate::ratios::{Ratios, calculate_ratios};
use crate::traits::FinancialOperations;

/// Extracted accounts and derived ratios for one company filing.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyAnalysis {
    pub query: ReportQuery,
    pub financials: FinancialMap,
    /// Accounts whose amounts could not be read and were stored as `0`.
    pub zeroed: Vec<String>,
    pub ratios: Ratios,
}

/// Runs the pipeline for one filing.
///
/// Returns `Ok(None)` when the upstream has nothing for the query. Extraction and ratio
/// failures never surface here; they are folded into the returned analysis.
pub async fn analyze<S>(source: &S, query: &ReportQuery) -> Result<Option<CompanyAnalysis>>
where
    S: FinancialOperations + ?Sized,
{
    let Some(doc) = source.financial_statement(query).await? else {
        return Ok(None);
    };

    let extraction = extract_financials(&doc);
    if extraction.is_partial() {
        tracing::warn!(
            corp_code = %query.corp_code,
            zeroed = ?extraction.zeroed,
            "Some amounts were not numeric and were stored as 0"
        );
    }

    let ratios = calculate_ratios(&extraction.financials);
    if let Err(e) = &ratios {
        tracing::warn!(corp_code = %query.corp_code, "Ratio calculation failed: {}", e);
    }

    Ok(Some(CompanyAnalysis {
        query: query.clone(),
        financials: extraction.financials,
        zeroed: extraction.zeroed,
        ratios: Ratios::from(ratios),
    }))
}
