use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::decimal_serde::decimal_serde;

/// A single statement transaction, parsed and validated.
///
/// The statement lists transactions chronologically per scheme/folio; the
/// ledger builder relies on that order and does not re-sort.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub scheme: String,
    pub folio: String,
    /// Signed unit quantity: positive = acquisition, negative = disposal.
    #[serde(with = "decimal_serde")]
    pub units: Decimal,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    /// Purchase price per unit; ZERO when the statement leaves it blank.
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    pub date: NaiveDate,
}

/// Current NAV snapshot entry for one scheme. External, read-only input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub scheme: String,
    pub scheme_name: String,
    #[serde(with = "decimal_serde")]
    pub nav: Decimal,
}
