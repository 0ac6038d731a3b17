use serde::Serialize;

/// Report-type codes understood by the DART `reprt_code` parameter.
pub mod report_code {
    /// Annual business report (사업보고서)
    pub const ANNUAL: &str = "11011";
    /// Half-year report (반기보고서)
    pub const HALF_YEAR: &str = "11012";
    /// First quarter report (1분기보고서)
    pub const FIRST_QUARTER: &str = "11013";
    /// Third quarter report (3분기보고서)
    pub const THIRD_QUARTER: &str = "11014";
}

/// Report code used when a single-company request does not name one.
pub const DEFAULT_REPORT_CODE: &str = report_code::FIRST_QUARTER;

/// Report code used by comparisons when none is given.
pub const DEFAULT_COMPARE_REPORT_CODE: &str = report_code::THIRD_QUARTER;

/// Fiscal year used by comparisons when none is given.
pub const DEFAULT_COMPARE_YEAR: &str = "2024";

/// Parameters identifying one financial statement filing.
///
/// Serializes to the upstream query parameter names, so it can be url-encoded directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportQuery {
    pub corp_code: String,
    pub bsns_year: String,
    pub reprt_code: String,
}

impl ReportQuery {
    pub fn new(corp_code: impl Into<String>, bsns_year: impl Into<String>) -> Self {
        Self {
            corp_code: corp_code.into(),
            bsns_year: bsns_year.into(),
            reprt_code: DEFAULT_REPORT_CODE.to_string(),
        }
    }

    pub fn with_report_code(mut self, reprt_code: impl Into<String>) -> Self {
        self.reprt_code = reprt_code.into();
        self
    }
}
