//! HTTP handlers.
//!
//! - `GET /` - service descriptor
//! - `GET /ratios` - ratios for one company
//! - `GET /compare` - ratios for two companies side by side

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::analysis::{CompanyAnalysis, analyze};
use crate::financials::FinancialMap;
use crate::options::{
    DEFAULT_COMPARE_REPORT_CODE, DEFAULT_COMPARE_YEAR, DEFAULT_REPORT_CODE, ReportQuery,
};
use crate::ratios::Ratios;

pub const SERVICE_STATUS: &str = "DART Financial Ratio API is running";
pub const ENDPOINTS: [&str; 2] = ["/ratios", "/compare"];

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub status: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatiosParams {
    pub corp_code: Option<String>,
    pub bsns_year: Option<String>,
    pub reprt_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatiosResponse {
    pub corp_code: String,
    pub year: String,
    pub financials: FinancialMap,
    pub ratios: Ratios,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareParams {
    pub corp1: Option<String>,
    pub corp2: Option<String>,
    pub year: Option<String>,
    pub reprt_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanySummary {
    pub corp_code: String,
    pub ratios: Ratios,
    pub financials: FinancialMap,
}

impl From<CompanyAnalysis> for CompanySummary {
    fn from(analysis: CompanyAnalysis) -> Self {
        Self {
            corp_code: analysis.query.corp_code,
            ratios: analysis.ratios,
            financials: analysis.financials,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub year: String,
    pub company_1: CompanySummary,
    pub company_2: CompanySummary,
}

/// Treats an empty parameter the same as an absent one.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: SERVICE_STATUS.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET /ratios?corp_code=&bsns_year=&reprt_code=
pub async fn ratios(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RatiosParams>,
) -> ApiResult<Json<RatiosResponse>> {
    let (Some(corp_code), Some(bsns_year)) =
        (present(params.corp_code), present(params.bsns_year))
    else {
        return Err(ApiError::MissingParameters(vec!["corp_code", "bsns_year"]));
    };
    let reprt_code =
        present(params.reprt_code).unwrap_or_else(|| DEFAULT_REPORT_CODE.to_string());

    let query = ReportQuery::new(corp_code, bsns_year).with_report_code(reprt_code);
    let analysis = analyze(state.source.as_ref(), &query)
        .await?
        .ok_or(ApiError::NoData)?;

    Ok(Json(RatiosResponse {
        corp_code: analysis.query.corp_code,
        year: analysis.query.bsns_year,
        financials: analysis.financials,
        ratios: analysis.ratios,
    }))
}

/// GET /compare?corp1=&corp2=&year=&reprt_code=
///
/// Both companies are fetched one after the other. If either lookup fails the whole
/// request fails and nothing about the other company is returned.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> ApiResult<Json<CompareResponse>> {
    let (Some(corp1), Some(corp2)) = (present(params.corp1), present(params.corp2)) else {
        return Err(ApiError::MissingParameters(vec!["corp1", "corp2"]));
    };
    let year = present(params.year).unwrap_or_else(|| DEFAULT_COMPARE_YEAR.to_string());
    let reprt_code =
        present(params.reprt_code).unwrap_or_else(|| DEFAULT_COMPARE_REPORT_CODE.to_string());

    let first = ReportQuery::new(corp1, year.clone()).with_report_code(reprt_code.clone());
    let company_1 = analyze(state.source.as_ref(), &first)
        .await?
        .map(CompanySummary::from)
        .ok_or(ApiError::NoData)?;

    let second = ReportQuery::new(corp2, year.clone()).with_report_code(reprt_code);
    let company_2 = analyze(state.source.as_ref(), &second)
        .await?
        .map(CompanySummary::from)
        .ok_or(ApiError::NoData)?;

    Ok(Json(CompareResponse {
        year,
        company_1,
        company_2,
    }))
}

/// Builds the router without middleware.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/ratios", get(ratios))
        .route("/compare", get(compare))
}
