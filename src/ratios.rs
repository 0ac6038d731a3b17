//! Financial ratio calculation.
//!
//! Four percentages are derived from a [`FinancialMap`] using fixed account names as
//! they appear in DART statements. A missing numerator counts as `0` and a missing
//! denominator as `1`, so a filing lacking an account yields `0` or the bare numerator
//! rather than an error. Only a denominator that is present and zero fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::financials::FinancialMap;

/// Account names the calculator reads.
pub mod account {
    pub const REVENUE: &str = "매출액";
    pub const OPERATING_INCOME: &str = "영업이익";
    pub const NET_INCOME: &str = "당기순이익";
    pub const TOTAL_LIABILITIES: &str = "부채총계";
    pub const TOTAL_EQUITY: &str = "자본총계";
}

/// Message carried by [`Ratios::Failed`].
pub const RATIO_FAILURE_MESSAGE: &str = "비율 계산 실패";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatioError {
    #[error("denominator account '{0}' is zero")]
    ZeroDenominator(&'static str),

    #[error("ratio '{0}' is not a finite number")]
    NonFinite(&'static str),
}

/// The four derived ratios, as percentages rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    #[serde(rename = "영업이익률")]
    pub operating_margin: f64,

    #[serde(rename = "순이익률")]
    pub net_margin: f64,

    #[serde(rename = "부채비율")]
    pub debt_to_equity: f64,

    #[serde(rename = "ROE")]
    pub return_on_equity: f64,
}

/// Ratios as reported to clients: either the full set or a single error marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ratios {
    Computed(RatioSet),
    Failed { error: String },
}

impl From<Result<RatioSet, RatioError>> for Ratios {
    fn from(result: Result<RatioSet, RatioError>) -> Self {
        match result {
            Ok(set) => Ratios::Computed(set),
            Err(_) => Ratios::Failed {
                error: RATIO_FAILURE_MESSAGE.to_string(),
            },
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn percentage(
    map: &FinancialMap,
    label: &'static str,
    numerator: &'static str,
    denominator: &'static str,
) -> Result<f64, RatioError> {
    let num = map.get(numerator).unwrap_or(0.0);
    let den = map.get(denominator).unwrap_or(1.0);
    if den == 0.0 {
        return Err(RatioError::ZeroDenominator(denominator));
    }

    let value = round2(num / den * 100.0);
    if !value.is_finite() {
        return Err(RatioError::NonFinite(label));
    }
    Ok(value)
}

/// Computes operating margin, net margin, debt-to-equity and ROE.
///
/// Any failure fails the whole set; partial results are never returned.
///
/// ```rust
/// use dartkit::financials::FinancialMap;
/// use dartkit::ratios::calculate_ratios;
///
/// let map: FinancialMap = [("매출액", 1000.0), ("영업이익", 100.0)].into_iter().collect();
/// let ratios = calculate_ratios(&map).unwrap();
/// assert_eq!(ratios.operating_margin, 10.0);
/// ```
pub fn calculate_ratios(map: &FinancialMap) -> Result<RatioSet, RatioError> {
    Ok(RatioSet {
        operating_margin: percentage(
            map,
            "operating_margin",
            account::OPERATING_INCOME,
            account::REVENUE,
        )?,
        net_margin: percentage(map, "net_margin", account::NET_INCOME, account::REVENUE)?,
        debt_to_equity: percentage(
            map,
            "debt_to_equity",
            account::TOTAL_LIABILITIES,
            account::TOTAL_EQUITY,
        )?,
        return_on_equity: percentage(
            map,
            "return_on_equity",
            account::NET_INCOME,
            account::TOTAL_EQUITY,
        )?,
    })
}
