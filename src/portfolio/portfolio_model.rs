use serde::Serialize;

use crate::valuation::PortfolioValuation;

/// Structured result of the full pipeline.
///
/// Valuation totals are always populated. The annualized return is `None`
/// when the solver failed, never a misleading zero; the failure itself is
/// logged with its typed cause.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    #[serde(flatten)]
    pub valuation: PortfolioValuation,
    /// Annualized money-weighted return as a fraction (0.12 = 12%).
    pub annualized_return: Option<f64>,
}
