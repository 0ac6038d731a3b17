//! Parser for the multi-company key account response (`fnlttMultiAcnt.xml`).
//!
//! The upstream body is a single `<result>` element carrying a status code, a message,
//! and zero or more repeated `<list>` elements, one per account line:
//!
//! ```text
//! <result>
//!   <status>000</status>
//!   <message>정상</message>
//!   <list>
//!     <account_nm>매출액</account_nm>
//!     <thstrm_amount>258,935,494,000,000</thstrm_amount>
//!     ...
//!   </list>
//! </result>
//! ```

use crate::Result;
use serde::Deserialize;

/// Upstream status reported for a successful lookup.
pub const STATUS_OK: &str = "000";

/// Upstream status reported when the filing has no data.
pub const STATUS_NO_DATA: &str = "013";

/// Root `<result>` element of a DART financial statement response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisclosureDocument {
    /// Upstream result code ("000" on success).
    pub status: Option<String>,

    /// Human readable upstream message.
    pub message: Option<String>,

    /// Account lines. Absent when the filing has no data.
    #[serde(rename = "list", default)]
    pub items: Vec<LineItem>,
}

/// One account line of a financial statement.
///
/// Only `account_nm` and `thstrm_amount` feed the ratio pipeline; the rest is kept so
/// callers can inspect where a figure came from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    /// Receipt number of the filing.
    pub rcept_no: Option<String>,

    pub bsns_year: Option<String>,

    pub corp_code: Option<String>,

    pub stock_code: Option<String>,

    pub reprt_code: Option<String>,

    /// Account name (e.g. "매출액", "당기순이익").
    pub account_nm: Option<String>,

    /// Statement scope: "CFS" (consolidated) or "OFS" (separate).
    pub fs_div: Option<String>,

    pub fs_nm: Option<String>,

    /// Statement kind: "BS" (balance sheet) or "IS" (income statement).
    pub sj_div: Option<String>,

    pub sj_nm: Option<String>,

    /// Current term label (e.g. "제 55 기").
    pub thstrm_nm: Option<String>,

    pub thstrm_dt: Option<String>,

    /// Current term amount, comma-formatted.
    pub thstrm_amount: Option<String>,

    /// Previous term amount, comma-formatted.
    pub frmtrm_amount: Option<String>,

    /// Amount two terms back, comma-formatted.
    pub bfefrmtrm_amount: Option<String>,

    pub ord: Option<String>,

    pub currency: Option<String>,
}

impl DisclosureDocument {
    /// Returns true when the upstream reported success, or reported nothing at all.
    pub fn is_ok(&self) -> bool {
        self.status.as_deref().is_none_or(|status| status == STATUS_OK)
    }
}

/// Parser for `fnlttMultiAcnt.xml` bodies.
#[derive(Debug, Default)]
pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses an XML body into a [`DisclosureDocument`].
    ///
    /// # Errors
    ///
    /// Returns `DartError::XmlError` when the content is not well-formed XML, which
    /// includes an empty body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dartkit::parsing::statement::StatementParser;
    ///
    /// let doc = StatementParser::new()
    ///     .parse("<result><status>013</status><message>no data</message></result>")
    ///     .unwrap();
    /// assert!(doc.items.is_empty());
    /// ```
    pub fn parse(&self, content: &str) -> Result<DisclosureDocument> {
        let doc: DisclosureDocument = quick_xml::de::from_str(content)?;
        Ok(doc)
    }
}
