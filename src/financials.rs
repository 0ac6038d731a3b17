//! Reduction of a disclosure document to a flat account -> amount map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parsing::statement::DisclosureDocument;

/// Flat mapping from trimmed account name to current term amount.
///
/// Keys are whatever account names the filing contains; there is no fixed schema.
/// Serializes as a plain JSON object ordered by account name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialMap(BTreeMap<String, f64>);

impl FinancialMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, account: &str) -> Option<f64> {
        self.0.get(account).copied()
    }

    /// Inserts an amount, replacing any earlier value for the same account.
    pub fn insert(&mut self, account: impl Into<String>, amount: f64) {
        self.0.insert(account.into(), amount);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FinancialMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Outcome of extracting amounts from a document.
///
/// Extraction never fails. Amounts that cannot be read are stored as `0` and their
/// accounts listed in `zeroed`, so an empty document, a fully numeric one, and one with
/// unreadable amounts can be told apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub financials: FinancialMap,
    /// Accounts whose amount was present but not digits-only, in document order.
    pub zeroed: Vec<String>,
}

impl Extraction {
    /// No account lines were found.
    pub fn is_empty(&self) -> bool {
        self.financials.is_empty()
    }

    /// At least one amount was replaced by `0`.
    pub fn is_partial(&self) -> bool {
        !self.zeroed.is_empty()
    }
}

/// Parses an upstream amount string.
///
/// Comma separators are removed, then the remainder must be non-empty and made of ASCII
/// digits only. Signs, decimal points and whitespace all fail this test, so `"-50"` and
/// `"12.5"` are rejected.
///
/// ```rust
/// use dartkit::financials::parse_amount;
///
/// assert_eq!(parse_amount("1,234"), Some(1234.0));
/// assert_eq!(parse_amount("-50"), None);
/// assert_eq!(parse_amount("12.5"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let digits = raw.replace(',', "");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Extracts the current term amount of every named account line.
///
/// Lines without an account name are skipped. A missing amount counts as `"0"`. When
/// the same account appears more than once the last line wins, which for statements
/// carrying both consolidated and separate figures means whichever scope is listed
/// last.
pub fn extract_financials(doc: &DisclosureDocument) -> Extraction {
    let mut extraction = Extraction::default();

    for item in &doc.items {
        let Some(name) = item.account_nm.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        let name = name.trim();
        let raw = item.thstrm_amount.as_deref().unwrap_or("0");

        match parse_amount(raw) {
            Some(amount) => {
                extraction.zeroed.retain(|z| z != name);
                extraction.financials.insert(name, amount);
            }
            None => {
                tracing::debug!(account = name, amount = raw, "Non-numeric amount stored as 0");
                if !extraction.zeroed.iter().any(|z| z == name) {
                    extraction.zeroed.push(name.to_string());
                }
                extraction.financials.insert(name, 0.0);
            }
        }
    }

    extraction
}
