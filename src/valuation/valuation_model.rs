use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::decimal_serde::decimal_serde;

/// Valuation of one holding against the current NAV snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub scheme: String,
    pub folio: String,
    pub scheme_name: String,
    /// Net unit balance as of the snapshot.
    #[serde(with = "decimal_serde")]
    pub units: Decimal,
    #[serde(with = "decimal_serde")]
    pub nav: Decimal,
    /// Acquisition cost of the remaining lots.
    #[serde(with = "decimal_serde")]
    pub cost_basis: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_gain: Decimal,
}

/// Portfolio-wide valuation: the priced positions plus their totals.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub positions: Vec<HoldingValuation>,
    #[serde(with = "decimal_serde")]
    pub total_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_gain: Decimal,
}
