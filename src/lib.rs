//! # dartkit - financial ratios from Korea's DART disclosure API
//!
//! dartkit queries the DART open API (`opendart.fss.or.kr`) for the key accounts of a
//! company's filing, reduces the reply to a flat account -> amount map, and derives
//! four ratios from it: operating margin, net margin, debt-to-equity and return on
//! equity.
//!
//! ## Features
//!
//! - **DART client** - one request per lookup, credential passed at construction
//! - **Statement parsing** - XML replies decoded with `quick-xml`
//! - **Extraction and ratios** - infallible extraction, all-or-nothing ratio sets
//! - **HTTP server** (feature `server`, on by default) - `/ratios` and `/compare`
//!   endpoints built on axum, plus the `dart-server` binary
//!
//! ## Basic Usage
//!
//! ```ignore
//! use dartkit::{Dart, ReportQuery, analyze};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dart = Dart::new("your-api-key")?;
//!     let query = ReportQuery::new("00126380", "2023");
//!
//!     if let Some(analysis) = analyze(&dart, &query).await? {
//!         println!("{:?}", analysis.ratios);
//!     }
//!     Ok(())
//! }
//! ```

mod analysis;
mod config;
mod core;
mod error;
mod options;
mod statements;
mod traits;

pub mod financials;
pub mod parsing;
pub mod ratios;

#[cfg(feature = "server")]
pub mod server;

pub use analysis::{CompanyAnalysis, analyze};
pub use config::{DEFAULT_BASE_URL, DartConfig, ServerConfig};
pub use self::core::Dart;
pub use error::{DartError, Result};
pub use options::{
    DEFAULT_COMPARE_REPORT_CODE, DEFAULT_COMPARE_YEAR, DEFAULT_REPORT_CODE, ReportQuery,
    report_code,
};
pub use statements::KEY_ACCOUNTS_RESOURCE;
pub use traits::FinancialOperations;

pub use financials::{Extraction, FinancialMap, extract_financials};
pub use parsing::statement::{DisclosureDocument, LineItem, StatementParser};
pub use ratios::{RatioError, RatioSet, Ratios, calculate_ratios};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
